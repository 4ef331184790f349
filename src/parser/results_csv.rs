//! Loader for the `test_results.csv` file.
//!
//! Reads the header, locates the required columns by name and turns each row
//! into a `ResultRecord`. Numeric cells that cannot be parsed become missing
//! values; only an unreadable file, a broken CSV structure or a missing
//! required column is an error.

use super::schema::{Percentage, ResultRecord};
use crate::utils::config::{
    FAILED_COLUMN, FUNCTION_COLUMN, METHOD_COLUMN, PASSED_COLUMN, PERCENTAGE_COLUMN,
    REQUIRED_COLUMNS,
};
use crate::utils::error::LoadError;
use log::{debug, info};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Column positions resolved from the header row
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    function: usize,
    method: usize,
    percentage: usize,
    passed: usize,
    failed: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, LoadError> {
        let find = |name: &str| -> Result<usize, LoadError> {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            function: find(FUNCTION_COLUMN)?,
            method: find(METHOD_COLUMN)?,
            percentage: find(PERCENTAGE_COLUMN)?,
            passed: find(PASSED_COLUMN)?,
            failed: find(FAILED_COLUMN)?,
        })
    }
}

/// Load all records from a results CSV file
///
/// **Public** - main entry point for loading
///
/// # Errors
/// * `LoadError::Io` - file missing or unreadable
/// * `LoadError::Csv` - structurally broken CSV
/// * `LoadError::MissingColumn` - header lacks a required column
pub fn load_results(path: impl AsRef<Path>) -> Result<Vec<ResultRecord>, LoadError> {
    let path = path.as_ref();

    info!("Loading results from: {}", path.display());

    let file = File::open(path)?;
    let records = parse_results(file)?;

    info!("Loaded {} records", records.len());

    Ok(records)
}

/// Parse records from any CSV source
///
/// **Public** - used by `load_results` and by tests with in-memory input
pub fn parse_results<R: Read>(source: R) -> Result<Vec<ResultRecord>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    let columns = ColumnIndex::from_headers(&headers)?;
    debug!(
        "Resolved columns {:?} from header with {} fields",
        REQUIRED_COLUMNS,
        headers.len()
    );

    let mut records = Vec::new();
    let mut unparsed_cells = 0usize;

    for result in reader.records() {
        let row = result?;

        let mut numeric = |idx: usize| -> Option<f64> {
            let cell = row.get(idx).unwrap_or("");
            let value = parse_numeric(cell);
            if value.is_none() && !cell.trim().is_empty() {
                unparsed_cells += 1;
            }
            value
        };

        let percentage = numeric(columns.percentage).and_then(Percentage::new);
        let passed = numeric(columns.passed);
        let failed = numeric(columns.failed);

        records.push(ResultRecord {
            function: label(&row, columns.function),
            method: label(&row, columns.method),
            percentage,
            passed,
            failed,
        });
    }

    if unparsed_cells > 0 {
        debug!("{} numeric cells could not be parsed and were treated as missing", unparsed_cells);
    }

    Ok(records)
}

/// Parse a numeric cell, treating anything non-finite or unparsable as missing
///
/// **Public** - also used to validate single cells in tests
pub fn parse_numeric(cell: &str) -> Option<f64> {
    cell.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Read a label cell; empty or absent cells are missing
///
/// Surrounding whitespace is trimmed. Tokens such as `NA` or `null` are
/// ordinary labels.
///
/// **Private** - internal helper
fn label(row: &csv::StringRecord, idx: usize) -> Option<String> {
    row.get(idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Function,Method,Percentage,Run,Passed,Failed
sum,baseline,50,1,8,2
sum,decomposition,50,1,9,1
";

    #[test]
    fn test_parse_numeric() {
        assert_eq!(parse_numeric("42"), Some(42.0));
        assert_eq!(parse_numeric(" 12.5 "), Some(12.5));
        assert_eq!(parse_numeric("abc"), None);
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric("NaN"), None);
        assert_eq!(parse_numeric("inf"), None);
    }

    #[test]
    fn test_parse_results_ignores_extra_columns() {
        let records = parse_results(SAMPLE.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0], ResultRecord::new("sum", "baseline", 50.0, 8.0, 2.0));
        assert_eq!(records[1].method.as_deref(), Some("decomposition"));
    }

    #[test]
    fn test_parse_results_tolerates_bad_cells() {
        let input = "Function,Method,Percentage,Passed,Failed\nf,baseline,n/a,x,3\n";
        let records = parse_results(input.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        assert!(records[0].percentage.is_none());
        assert!(records[0].passed.is_none());
        assert_eq!(records[0].failed, Some(3.0));
    }

    #[test]
    fn test_parse_results_short_row() {
        let input = "Function,Method,Percentage,Passed,Failed\nf,baseline,25\n";
        let records = parse_results(input.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        assert!(records[0].passed.is_none());
        assert!(records[0].failed.is_none());
    }

    #[test]
    fn test_parse_results_column_order_free() {
        let input = "Failed,Passed,Percentage,Method,Function\n1,3,75,baseline,f\n";
        let records = parse_results(input.as_bytes()).unwrap();

        assert_eq!(records[0], ResultRecord::new("f", "baseline", 75.0, 3.0, 1.0));
    }

    #[test]
    fn test_parse_results_missing_column() {
        let input = "Function,Method,Percentage,Passed\nf,baseline,25,1\n";
        let result = parse_results(input.as_bytes());

        match result {
            Err(LoadError::MissingColumn(name)) => assert_eq!(name, "Failed"),
            other => panic!("expected missing column error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_label_is_missing() {
        let input = "Function,Method,Percentage,Passed,Failed\n,baseline,25,1,1\n";
        let records = parse_results(input.as_bytes()).unwrap();

        assert!(records[0].function.is_none());
    }

    #[test]
    fn test_labels_trimmed_and_na_tokens_kept() {
        let input =
            "Function,Method,Percentage,Passed,Failed\nNA , baseline,25,1,1\nnull,nan,25,1,1\n";
        let records = parse_results(input.as_bytes()).unwrap();

        assert_eq!(records[0].function.as_deref(), Some("NA"));
        assert_eq!(records[0].method.as_deref(), Some("baseline"));
        assert_eq!(records[1].function.as_deref(), Some("null"));
        assert_eq!(records[1].method.as_deref(), Some("nan"));
    }
}
