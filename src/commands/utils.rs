use crate::aggregator::Analysis;
use crate::charts::{render_png, render_svg, Chart};
use crate::output::{show_image, write_svg};
use crate::parser::load_results;
use crate::utils::config::REPORT_SCHEMA_VERSION;
use anyhow::{Context, Result};
use log::{debug, warn};
use std::path::Path;

use super::models::{DisplayMode, OutputFormat};

/// Load the results file and run both aggregation stages
///
/// Shared first half of every command.
pub fn prepare_analysis(input_path: &Path) -> Result<Analysis> {
    let records = load_results(input_path)
        .with_context(|| format!("Failed to load results from {}", input_path.display()))?;

    let analysis = Analysis::from_records(&records);

    debug!(
        "Analysis: {} records, {} function groups, {} method groups, {} percentages",
        analysis.record_count,
        analysis.function_means.len(),
        analysis.method_means.len(),
        analysis.percentages.len()
    );

    Ok(analysis)
}

/// Render a chart in the requested format and write it to `path`
pub fn save_chart<C: Chart>(chart: &C, path: &Path, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Png => {
            crate::output::prepare_output_path(path)?;
            render_png(chart, path)
                .with_context(|| format!("Failed to render {}", path.display()))?;
        }
        OutputFormat::Svg => {
            let svg = render_svg(chart)
                .with_context(|| format!("Failed to render {}", path.display()))?;
            write_svg(&svg, path)?;
        }
    }

    Ok(())
}

/// Open a saved chart when the display mode asks for it
///
/// A viewer that cannot be launched is logged, not fatal.
pub fn present(path: &Path, display: DisplayMode) {
    if display == DisplayMode::SaveAndShow {
        if let Err(e) = show_image(path) {
            warn!("Could not display {}: {}", path.display(), e);
        }
    }
}

/// Display version information
pub fn display_version() {
    println!("Effectiveness Plots v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", REPORT_SCHEMA_VERSION);
    println!();
    println!("Verification pass-rate charts for synthesis test results.");
}
