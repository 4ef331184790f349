//! Summary command implementation.
//!
//! Prints the aggregated tables behind the charts and optionally writes them
//! as a JSON report.

use crate::aggregator::Analysis;
use crate::output::{build_report, write_report};
use anyhow::{Context, Result};
use log::info;
use std::fmt::Write;
use std::path::Path;

use super::utils::prepare_analysis;

/// Execute the summary command
///
/// **Public** - main entry point called from main.rs
pub fn execute_summary(input_path: &Path, json_output: Option<&Path>) -> Result<Analysis> {
    let analysis = prepare_analysis(input_path)?;

    println!("{}", format_summary(&analysis));

    if let Some(json_path) = json_output {
        let report = build_report(&analysis, input_path);
        write_report(&report, json_path).context("Failed to write JSON report")?;
        info!("✓ Report written to: {}", json_path.display());
    }

    Ok(analysis)
}

/// Render both aggregation tables as plain text
pub fn format_summary(analysis: &Analysis) -> String {
    let mut out = String::new();
    let rule = "=".repeat(64);

    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "VERIFICATION PASS RATES ({} records)", analysis.record_count);
    let _ = writeln!(out, "{}", rule);

    let _ = writeln!(out, "\nMean per method and percentage (mean of function means):");
    let _ = writeln!(
        out,
        "  {:<16} {:>10} {:>10} {:>10}",
        "Method", "Percent", "Mean", "Functions"
    );
    for mm in &analysis.method_means {
        let _ = writeln!(
            out,
            "  {:<16} {:>10} {:>10} {:>10}",
            mm.method,
            format!("{}%", mm.percentage),
            format_mean(mm.mean),
            mm.functions
        );
    }

    let _ = writeln!(out, "\nMean per function, method and percentage:");
    let _ = writeln!(
        out,
        "  {:<24} {:<16} {:>8} {:>10} {:>8}",
        "Function", "Method", "Percent", "Mean", "Rows"
    );
    for fm in &analysis.function_means {
        let _ = writeln!(
            out,
            "  {:<24} {:<16} {:>8} {:>10} {:>8}",
            fm.function,
            fm.method,
            format!("{}%", fm.percentage),
            format_mean(fm.mean),
            fm.samples
        );
    }

    let _ = write!(out, "{}", rule);
    out
}

/// Format a mean with two decimals, `n/a` when undefined
fn format_mean(mean: Option<f64>) -> String {
    match mean {
        Some(value) => format!("{:.2}", value),
        None => "n/a".to_string(),
    }
}
