// src/extract/orient.rs

use indexmap::IndexMap;

use crate::extract::clean::{clean_cell, CleanedCell};
use crate::extract::locate::RawTable;

/// Flat label → cleaned-cell mapping produced by reshaping a raw table.
pub type OrientedRecord = IndexMap<String, CleanedCell>;

/// How a source table's rows and columns are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Label/value column pairs: two columns map rows directly; wider tables
    /// are treated as repeating side-by-side label/value blocks.
    Pairs,
    /// Row-index × column-header matrix (performance tables): every cell
    /// becomes one pair keyed `"{row label} - {column header}"`.
    Matrix,
}

/// Reshapes a raw table into a flat label → cell mapping.
///
/// Blank header cells are replaced by a positional `"Column N"` placeholder.
/// Empty rows are dropped before reshaping; pairs with an empty label are
/// dropped after it.
pub fn resolve(table: &RawTable, orientation: Orientation) -> OrientedRecord {
    let rows: Vec<&Vec<String>> = table.iter().filter(|r| !r.is_empty()).collect();
    if rows.is_empty() {
        return OrientedRecord::new();
    }

    let header: Vec<String> = rows[0]
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if h.is_empty() {
                format!("Column {}", i)
            } else {
                h.clone()
            }
        })
        .collect();
    let data = &rows[1..];

    match orientation {
        Orientation::Pairs => resolve_pairs(&header, data),
        Orientation::Matrix => resolve_matrix(&header, data),
    }
}

fn resolve_pairs(header: &[String], data: &[&Vec<String>]) -> OrientedRecord {
    let mut ncols = header.len();
    let mut record = OrientedRecord::new();

    if ncols > 2 && ncols % 2 != 0 {
        // Unspecified upstream; pairing would shift labels into value
        // columns from here on, so the trailing column is ignored.
        tracing::warn!(
            "Table has {} columns (odd, >2); ignoring the trailing unpaired column",
            ncols
        );
        ncols -= 1;
    }

    if ncols == 2 {
        // Each data row is one (label, value) pair directly.
        for row in data {
            let label = row[0].clone();
            if label.is_empty() {
                continue;
            }
            let raw_value = row.get(1).map(String::as_str).unwrap_or("");
            record.insert(label, clean_cell(raw_value));
        }
    } else {
        // Repeating label/value column pairs, flattened block by block:
        // R data rows x 2K columns yields R*K pairs.
        for block in 0..ncols / 2 {
            for row in data {
                let label = row.get(2 * block).map(String::as_str).unwrap_or("");
                if label.is_empty() {
                    continue;
                }
                let raw_value = row.get(2 * block + 1).map(String::as_str).unwrap_or("");
                record.insert(label.to_string(), clean_cell(raw_value));
            }
        }
    }

    record
}

fn resolve_matrix(header: &[String], data: &[&Vec<String>]) -> OrientedRecord {
    let mut record = OrientedRecord::new();

    // First column is the row index; remaining columns carry one value per
    // header label.
    for row in data {
        let metric = row.first().map(String::as_str).unwrap_or("");
        if metric.is_empty() {
            continue;
        }
        for (j, label) in header.iter().enumerate().skip(1) {
            let raw_value = row.get(j).map(String::as_str).unwrap_or("");
            record.insert(format!("{} - {}", metric, label), clean_cell(raw_value));
        }
    }

    record
}
