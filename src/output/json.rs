//! JSON report of the aggregated tables.
//!
//! Lets the numbers behind the charts be inspected or diffed without
//! re-running the aggregation.

use crate::aggregator::{Analysis, FunctionMean, MethodMean};
use crate::utils::config::REPORT_SCHEMA_VERSION;
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// Results file the report was computed from
    pub source: String,

    /// Timestamp when the report was generated
    pub generated_at: String,

    pub record_count: usize,
    pub function_means: Vec<FunctionMean>,
    pub method_means: Vec<MethodMean>,
}

/// Build a report from an analysis
pub fn build_report(analysis: &Analysis, source: &Path) -> Report {
    Report {
        version: REPORT_SCHEMA_VERSION.to_string(),
        source: source.display().to_string(),
        generated_at: chrono::Utc::now().to_rfc3339(),
        record_count: analysis.record_count,
        function_means: analysis.function_means.clone(),
        method_means: analysis.method_means.clone(),
    }
}

/// Write a report to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_report(report: &Report, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing report to: {}", output_path.display());

    super::prepare_output_path(output_path)?;

    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, report)?;

    debug!(
        "Report written ({} function means, {} method means)",
        report.function_means.len(),
        report.method_means.len()
    );

    Ok(())
}

/// Read a report from a JSON file
///
/// **Public** - useful for validation and testing
pub fn read_report(input_path: impl AsRef<Path>) -> Result<Report, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path)?;
    let report: Report = serde_json::from_reader(file)?;

    Ok(report)
}
