use crate::utils::config::{
    BASELINE_BOXPLOT_FILE, BASELINE_METHOD, DECOMPOSITION_BOXPLOT_FILE, DECOMPOSITION_METHOD,
    DEFAULT_INPUT_FILE, TREND_PLOT_FILE,
};
use clap::ValueEnum;
use std::path::{Path, PathBuf};

/// Image format of saved charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raster image drawn straight to disk
    #[default]
    Png,
    /// Vector image rendered in memory, then written
    Svg,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
        }
    }

    /// Swap the extension of a configured file name to match this format
    pub fn file_name(self, name: &str) -> String {
        Path::new(name)
            .with_extension(self.extension())
            .to_string_lossy()
            .into_owned()
    }
}

/// What happens after a chart is saved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Save,
    SaveAndShow,
}

/// One box plot to produce: which method, how to title it, where to save it
#[derive(Debug, Clone, PartialEq)]
pub struct MethodTarget {
    /// Method value matched against the `Method` column
    pub method: String,

    /// Name used in the chart title
    pub label: String,

    /// Output file name inside the output directory
    pub file_name: String,
}

impl MethodTarget {
    pub fn new(method: &str, label: &str, file_name: &str) -> Self {
        Self {
            method: method.to_string(),
            label: label.to_string(),
            file_name: file_name.to_string(),
        }
    }
}

/// Settings shared by every command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Results CSV to read
    pub input_path: PathBuf,

    /// Directory charts are written to
    pub output_dir: PathBuf,

    /// Box plots of the distribution view
    pub boxplot_targets: Vec<MethodTarget>,

    /// File name of the trend view
    pub trend_file_name: String,

    pub format: OutputFormat,
    pub display: DisplayMode,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
            output_dir: PathBuf::from("."),
            boxplot_targets: vec![
                MethodTarget::new(BASELINE_METHOD, "Baseline", BASELINE_BOXPLOT_FILE),
                MethodTarget::new(
                    DECOMPOSITION_METHOD,
                    "Dekompositionelle",
                    DECOMPOSITION_BOXPLOT_FILE,
                ),
            ],
            trend_file_name: TREND_PLOT_FILE.to_string(),
            format: OutputFormat::Png,
            display: DisplayMode::Save,
        }
    }
}

impl PipelineConfig {
    /// File name after applying the output format
    pub fn file_name(&self, name: &str) -> String {
        self.format.file_name(name)
    }

    /// Full output path for a configured file name
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(self.file_name(name))
    }
}

/// A chart written to disk, with the confirmation printed for it
#[derive(Debug, Clone, PartialEq)]
pub struct SavedChart {
    pub path: PathBuf,
    pub message: String,
}
