//! Effectiveness Plots CLI
//!
//! Renders verification pass-rate charts from synthesis test results.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use effectiveness_plots::commands::{
    display_version, execute_boxplot, execute_report, execute_summary, execute_trend,
    DisplayMode, OutputFormat, PipelineConfig,
};
use effectiveness_plots::utils::config::DEFAULT_INPUT_FILE;

/// Effectiveness Plots - verification pass-rate charts
#[derive(Parser, Debug)]
#[command(name = "effectiveness")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Options shared by the chart commands
#[derive(Args, Debug)]
struct ChartOptions {
    /// Results CSV to read
    #[arg(short, long, default_value = DEFAULT_INPUT_FILE)]
    input: PathBuf,

    /// Directory to write charts to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Image format of the charts
    #[arg(long, value_enum, default_value_t = OutputFormat::Png)]
    format: OutputFormat,

    /// Open each saved chart in the system image viewer
    #[arg(long)]
    show: bool,
}

impl ChartOptions {
    fn into_config(self) -> PipelineConfig {
        PipelineConfig {
            input_path: self.input,
            output_dir: self.output_dir,
            format: self.format,
            display: if self.show {
                DisplayMode::SaveAndShow
            } else {
                DisplayMode::Save
            },
            ..Default::default()
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Render one box plot per method (distribution view)
    Boxplot(ChartOptions),

    /// Render the mean pass rate per method as a line plot (trend view)
    Trend(ChartOptions),

    /// Render both views from a single load
    Report(ChartOptions),

    /// Print the aggregated tables
    Summary {
        /// Results CSV to read
        #[arg(short, long, default_value = DEFAULT_INPUT_FILE)]
        input: PathBuf,

        /// Also write the tables as a JSON report
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Boxplot(options) => {
            execute_boxplot(&options.into_config())?;
        }

        Commands::Trend(options) => {
            execute_trend(&options.into_config())?;
        }

        Commands::Report(options) => {
            execute_report(&options.into_config())?;
        }

        Commands::Summary { input, json } => {
            execute_summary(&input, json.as_deref())?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
