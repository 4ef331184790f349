//! Boxplot command implementation.
//!
//! The boxplot command:
//! 1. Loads and aggregates the results
//! 2. Buckets each method's function means into the fixed categories
//! 3. Renders and saves one box plot per method

use crate::aggregator::Analysis;
use crate::charts::{prepare_categories, BoxplotChart, BoxplotConfig};
use crate::utils::config::PERCENTAGE_CATEGORIES;
use anyhow::Result;
use log::info;

use super::models::{PipelineConfig, SavedChart};
use super::utils::{prepare_analysis, present, save_chart};

/// Confirmation printed after a box plot is saved
pub fn boxplot_saved_message(file_name: &str) -> String {
    format!("Der Boxplot wurde als {} gespeichert", file_name)
}

/// Execute the boxplot command
///
/// **Public** - main entry point called from main.rs
pub fn execute_boxplot(config: &PipelineConfig) -> Result<Vec<SavedChart>> {
    info!("Step 1/2: Loading and aggregating results...");
    let analysis = prepare_analysis(&config.input_path)?;

    info!("Step 2/2: Rendering box plots...");
    render_boxplots(&analysis, config)
}

/// Render every configured box plot from an existing analysis
///
/// **Public** - reused by the report command
pub fn render_boxplots(analysis: &Analysis, config: &PipelineConfig) -> Result<Vec<SavedChart>> {
    let mut saved = Vec::with_capacity(config.boxplot_targets.len());

    for target in &config.boxplot_targets {
        let categories = prepare_categories(
            analysis.function_means_for(&target.method),
            &PERCENTAGE_CATEGORIES,
        );
        let chart = BoxplotChart::new(categories, BoxplotConfig::for_method(&target.label));

        let file_name = config.file_name(&target.file_name);
        let path = config.output_dir.join(&file_name);

        save_chart(&chart, &path, config.format)?;

        let message = boxplot_saved_message(&file_name);
        println!("{}", message);
        present(&path, config.display);

        saved.push(SavedChart { path, message });
    }

    Ok(saved)
}
