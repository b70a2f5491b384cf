// src/main.rs
use clap::Parser;

use factsheet_extractor::config::ExtractionConfig;
use factsheet_extractor::document;
use factsheet_extractor::extract::Category;
use factsheet_extractor::pipeline::ExtractionContext;
use factsheet_extractor::storage::StorageManager;
use factsheet_extractor::utils::{self, AppError};

/// Command Line Interface for the fact-sheet normalization engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// ISIN code of the instrument
    #[arg(short, long)]
    isin: String,

    /// Path to the parsed-document JSON produced by the parsing service
    #[arg(long)]
    input: String,

    /// Single category to extract (default: all categories)
    #[arg(short, long, value_enum)]
    category: Option<Category>,

    /// Path to the heading alias mappings YAML
    #[arg(long, default_value = "ref_data/field_mappings.yaml")]
    mappings: String,

    /// Path to the country-name reference list
    #[arg(long, default_value = "ref_data/countries.txt")]
    countries: String,

    /// Output directory for extracted records
    #[arg(short, long, default_value = "./output")]
    output_dir: String,

    /// Label substrings to exclude before normalization (repeatable),
    /// e.g. --exclude "Total of Portfolio" --exclude "Cash"
    #[arg(long)]
    exclude: Vec<String>,
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting extraction for args: {:?}", args);

    // 3. Load configuration once; it stays immutable for the whole run
    let config = ExtractionConfig::load(&args.mappings, &args.countries)?;
    let context = ExtractionContext::new(config);

    // 4. Initialize storage
    let storage = StorageManager::new(&args.output_dir)?;

    // 5. Load the parsed document
    let doc = document::load_document(&args.input)?;
    tracing::info!("Loaded parsed document with {} pages", doc.len());

    // 6. Extract the requested category, or all of them
    let categories: Vec<Category> = match args.category {
        Some(category) => vec![category],
        None => Category::ALL.to_vec(),
    };

    let mut success_count = 0;
    let mut failure_count = 0;

    for category in categories {
        tracing::info!("Extracting category: {}", category);

        match context.extract_filtered(&doc, category, &args.exclude) {
            Ok(record) => {
                success_count += 1;

                match storage.save_record(&args.isin, category, &record) {
                    Ok(path) => tracing::info!("Saved record to: {}", path.display()),
                    Err(e) => tracing::error!("Failed to save record: {}", e),
                }

                match storage.save_record_metadata(&args.isin, category, &record) {
                    Ok(path) => tracing::info!("Saved metadata to: {}", path.display()),
                    Err(e) => tracing::error!("Failed to save metadata: {}", e),
                }
            }
            Err(e) => {
                tracing::error!("Failed to extract {}: {}", category, e);
                failure_count += 1;
            }
        }
    }

    tracing::info!(
        "Extraction finished. Success: {}, Failures: {}",
        success_count,
        failure_count
    );

    if success_count == 0 && failure_count > 0 {
        return Err(AppError::Processing(format!(
            "Failed to extract any category for ISIN {}",
            args.isin
        )));
    }

    Ok(())
}
