// tests/extraction_test.rs
//
// End-to-end properties: two providers' maturity tables normalized
// independently onto the 6-bucket schema and merged for comparison, the
// fraction-vs-percentage rescale, and the caller-supplied row pre-filter.

use approx::assert_relative_eq;
use indexmap::IndexMap;

use factsheet_extractor::config::ExtractionConfig;
use factsheet_extractor::document::{Item, Page, ParsedDocument};
use factsheet_extractor::extract::{merge_records, Category};
use factsheet_extractor::pipeline::ExtractionContext;

fn context() -> ExtractionContext {
    let mut aliases = IndexMap::new();
    aliases.insert(
        "maturity".to_string(),
        vec!["Maturity Breakdown".to_string(), "Maturity".to_string()],
    );
    aliases.insert(
        "market_allocation".to_string(),
        vec!["Market Allocation".to_string()],
    );
    aliases.insert(
        "credit_rate".to_string(),
        vec!["Credit Rating".to_string()],
    );
    let countries = ["France", "Italy", "Germany", "Spain", "Belgium", "Netherlands",
        "Austria", "Portugal", "Finland", "Ireland"]
        .iter()
        .map(|c| c.to_string())
        .collect();
    ExtractionContext::new(ExtractionConfig::from_parts(aliases, countries))
}

fn doc(heading: &str, rows: &[(&str, &str)]) -> ParsedDocument {
    let mut table = vec![vec!["Label".to_string(), "Value".to_string()]];
    for (label, value) in rows {
        table.push(vec![label.to_string(), value.to_string()]);
    }
    vec![Page {
        items: vec![
            Item::Heading { value: heading.to_string() },
            Item::Table { rows: table },
        ],
    }]
}

#[test]
fn two_provider_maturity_tables_merge_into_six_rows() {
    let ctx = context();

    // Provider 1: coarse ranges, mixed percent signs.
    let doc1 = doc(
        "Maturity Breakdown",
        &[
            ("Under 1 Year", "0.1%"),
            ("1 - 5 Years", "41.1"),
            ("5 - 10 Years", "30.7"),
            ("10 - 15 Years", "10.0"),
            ("15 - 20 Years", "7.3"),
            ("20 - 25 Years", "3.6%"),
            ("Over 25 Years", "7.1"),
        ],
    );

    // Provider 2: fine-grained ranges plus a cash row.
    let doc2 = doc(
        "Maturity",
        &[
            ("Cash and Derivatives", "-0.05"),
            ("0 - 1 Years", "1.36"),
            ("1 - 2 Years", "9.81"),
            ("2 - 3 Years", "10.88"),
            ("3 - 5 Years", "18.61"),
            ("5 - 7 Years", "13.12"),
            ("7 - 10 Years", "17.13"),
            ("10 - 15 Years", "10.23"),
            ("15 - 20 Years", "8.91"),
            ("20+ Years", "10.99"),
        ],
    );

    let exclude = vec!["cash".to_string()];
    let record1 = ctx
        .extract_filtered(&doc1, Category::Maturity, &exclude)
        .unwrap();
    let record2 = ctx
        .extract_filtered(&doc2, Category::Maturity, &exclude)
        .unwrap();

    assert_eq!(record1.len(), 6);
    assert_eq!(record2.len(), 6);

    assert_relative_eq!(record1[">20 years"].unwrap(), 10.7, epsilon = 1e-9);
    assert_relative_eq!(record2["<1 year"].unwrap(), 1.36);
    assert_relative_eq!(record2["1-5 years"].unwrap(), 39.3, epsilon = 1e-9);
    assert_relative_eq!(record2["5-10 years"].unwrap(), 30.25, epsilon = 1e-9);

    let merged = merge_records(&record1, &record2);
    assert_eq!(merged.len(), 6, "outer join on buckets must yield exactly 6 rows");
    assert_relative_eq!(merged["15-20 years"].0, 7.3);
    assert_relative_eq!(merged["15-20 years"].1, 8.91);
}

#[test]
fn unfiltered_cash_row_passes_through_as_seventh_key() {
    let ctx = context();
    let doc2 = doc(
        "Maturity",
        &[
            ("Cash and Derivatives", "-0.05"),
            ("0 - 1 Years", "1.36"),
            ("1 - 2 Years", "9.81"),
            ("3 - 5 Years", "18.61"),
        ],
    );
    let record = ctx.extract(&doc2, Category::Maturity).unwrap();
    assert_eq!(record.len(), 7);
    assert_relative_eq!(record["Cash and Derivatives"].unwrap(), -0.05);
}

#[test]
fn fraction_encoded_table_is_rescaled_to_percentages() {
    let ctx = context();
    let doc = doc(
        "Maturity Breakdown",
        &[
            ("Under 1 Year", "0.001"),
            ("1 - 5 Years", "0.411"),
            ("5 - 10 Years", "0.307"),
        ],
    );
    let record = ctx.extract(&doc, Category::Maturity).unwrap();
    assert_relative_eq!(record["<1 year"].unwrap(), 0.1, epsilon = 1e-9);
    assert_relative_eq!(record["1-5 years"].unwrap(), 41.1, epsilon = 1e-9);
    assert_relative_eq!(record["5-10 years"].unwrap(), 30.7, epsilon = 1e-9);

    // Post-mapping bucket sum equals the pre-scale sum x100.
    let total: f64 = record.values().filter_map(|v| *v).sum();
    assert_relative_eq!(total, 71.9, epsilon = 1e-9);
}

#[test]
fn two_provider_rating_tables_share_one_schema() {
    let ctx = context();
    let doc1 = doc(
        "Credit Rating",
        &[
            ("Cash and/or Derivatives", "-0.05"),
            ("AAA", "22.88"),
            ("AA", "35.46"),
            ("A", "18.49"),
            ("BBB", "23.22"),
        ],
    );
    let doc2 = doc(
        "Credit Rating",
        &[
            ("AAA", "22.8%"),
            ("AA Rated", "35.7"),
            ("A", "17.8"),
            ("BBB", "21.1"),
            ("Not Rated", "2.5"),
        ],
    );

    let record1 = ctx
        .extract_filtered(&doc1, Category::CreditRate, &["cash".to_string()])
        .unwrap();
    let record2 = ctx.extract(&doc2, Category::CreditRate).unwrap();

    let merged = merge_records(&record1, &record2);
    assert_eq!(merged.len(), 6);
    assert_relative_eq!(merged["AA"].0, 35.46);
    assert_relative_eq!(merged["AA"].1, 35.7);
    assert_relative_eq!(merged["Not Rated"].0, 0.0);
    assert_relative_eq!(merged["Not Rated"].1, 2.5);
}

#[test]
fn market_allocation_rekeys_across_provider_phrasings() {
    let ctx = context();
    let doc1 = doc(
        "Market Allocation",
        &[("France", "23.7%"), ("Italy", "22.2"), ("Germany", "18.5")],
    );
    let doc2 = doc(
        "Market Allocation",
        &[
            ("FRANCE (REPUBLIC OF)", "23.52%"),
            ("ITALY (REPUBLIC OF)", "22.12%"),
            ("GERMANY (FEDERAL REPUBLIC OF)", "18.57%"),
            ("Total of Portfolio", "96.55%"),
        ],
    );

    let record1 = ctx.extract(&doc1, Category::MarketAllocation).unwrap();
    let record2 = ctx.extract(&doc2, Category::MarketAllocation).unwrap();

    let merged = merge_records(&record1, &record2);
    assert_relative_eq!(merged["France"].0, 23.7);
    assert_relative_eq!(merged["France"].1, 23.52);
    // The total row is only present where the provider printed one.
    assert_relative_eq!(merged["Total of Portfolio"].0, 0.0);
    assert_relative_eq!(merged["Total of Portfolio"].1, 96.55);
}

#[test]
fn shipped_reference_config_parses() {
    let manifest = env!("CARGO_MANIFEST_DIR");
    let config = ExtractionConfig::load(
        format!("{}/ref_data/field_mappings.yaml", manifest),
        format!("{}/ref_data/countries.txt", manifest),
    )
    .unwrap();

    for category in Category::ALL {
        assert!(
            !config.aliases_for(category).unwrap().is_empty(),
            "category {} must have aliases",
            category
        );
    }
    assert!(config.countries().contains(&"France".to_string()));
}
