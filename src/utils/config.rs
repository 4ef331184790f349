//! Configuration and constants for the CLI.

/// Input file read when no `--input` is given
pub const DEFAULT_INPUT_FILE: &str = "test_results.csv";

/// Current JSON report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

// Column names in the results CSV header. Any other column (e.g. "Run") is ignored.
pub const FUNCTION_COLUMN: &str = "Function";
pub const METHOD_COLUMN: &str = "Method";
pub const PERCENTAGE_COLUMN: &str = "Percentage";
pub const PASSED_COLUMN: &str = "Passed";
pub const FAILED_COLUMN: &str = "Failed";

pub const REQUIRED_COLUMNS: &[&str] = &[
    FUNCTION_COLUMN,
    METHOD_COLUMN,
    PERCENTAGE_COLUMN,
    PASSED_COLUMN,
    FAILED_COLUMN,
];

/// Box plot categories, in x-axis order
pub const PERCENTAGE_CATEGORIES: [f64; 7] = [25.0, 37.0, 50.0, 62.0, 75.0, 87.0, 100.0];

pub const BASELINE_METHOD: &str = "baseline";
pub const DECOMPOSITION_METHOD: &str = "decomposition";

pub const BASELINE_BOXPLOT_FILE: &str = "baseline_boxplot.png";
pub const DECOMPOSITION_BOXPLOT_FILE: &str = "decomposition_boxplot.png";
pub const TREND_PLOT_FILE: &str = "effectiveness_plot.png";

/// Canvas size in pixels (10x6 figure units at 100 dpi)
pub const CANVAS_SIZE: (u32, u32) = (1000, 600);

/// Y axis range shared by both views
pub const Y_RANGE: std::ops::Range<f64> = 0.0..100.0;
