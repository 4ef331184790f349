//! Effectiveness Plots
//!
//! Verification pass-rate charts for synthesis test results.
//!
//! Reads a `test_results.csv` with one row per test run, derives the share of
//! passed verification tests, averages it per function, method and
//! percentage, and renders:
//!
//! - one box plot per method over the fixed percentage categories
//! - one line plot with the mean pass rate of every method
//!
//! ## Getting Started
//!
//! ```bash
//! effectiveness report --input test_results.csv
//! effectiveness --help
//! ```

pub mod aggregator;
pub mod charts;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
