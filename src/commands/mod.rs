//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod boxplot;
pub mod models;
pub mod summary;
pub mod trend;
pub mod utils;

// Re-export main command functions
pub use boxplot::{boxplot_saved_message, execute_boxplot, render_boxplots};
pub use models::{DisplayMode, MethodTarget, OutputFormat, PipelineConfig, SavedChart};
pub use summary::{execute_summary, format_summary};
pub use trend::{execute_trend, render_trend, trend_saved_message};
pub use utils::{display_version, prepare_analysis};

use anyhow::Result;
use log::info;

/// Execute the report command: both views from a single load
///
/// **Public** - main entry point called from main.rs
pub fn execute_report(config: &PipelineConfig) -> Result<Vec<SavedChart>> {
    info!("Step 1/3: Loading and aggregating results...");
    let analysis = prepare_analysis(&config.input_path)?;

    info!("Step 2/3: Rendering box plots...");
    let mut saved = render_boxplots(&analysis, config)?;

    info!("Step 3/3: Rendering trend plot...");
    saved.push(render_trend(&analysis, config)?);

    Ok(saved)
}
