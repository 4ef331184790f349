//! Trend command implementation.
//!
//! Loads and aggregates the results, then renders the mean pass rate of every
//! method across percentages as one line plot.

use crate::aggregator::Analysis;
use crate::charts::{prepare_series, TrendChart, TrendConfig};
use anyhow::Result;
use log::info;

use super::models::{PipelineConfig, SavedChart};
use super::utils::{prepare_analysis, present, save_chart};

/// Confirmation printed after the line plot is saved
pub fn trend_saved_message(file_name: &str) -> String {
    format!("Liniendiagramm als {} gespeichert.", file_name)
}

/// Execute the trend command
///
/// **Public** - main entry point called from main.rs
pub fn execute_trend(config: &PipelineConfig) -> Result<SavedChart> {
    info!("Step 1/2: Loading and aggregating results...");
    let analysis = prepare_analysis(&config.input_path)?;

    info!("Step 2/2: Rendering trend plot...");
    render_trend(&analysis, config)
}

/// Render the trend plot from an existing analysis
///
/// **Public** - reused by the report command
pub fn render_trend(analysis: &Analysis, config: &PipelineConfig) -> Result<SavedChart> {
    let series = prepare_series(&analysis.method_means);
    info!("Plotting {} method series", series.len());

    let chart = TrendChart::new(series, analysis.percentages.clone(), TrendConfig::default());

    let file_name = config.file_name(&config.trend_file_name);
    let path = config.output_dir.join(&file_name);

    save_chart(&chart, &path, config.format)?;

    let message = trend_saved_message(&file_name);
    println!("{}", message);
    present(&path, config.display);

    Ok(SavedChart { path, message })
}
