//! Results loading and schema definitions.
//!
//! This module handles:
//! - Reading the results CSV
//! - Coercing numeric columns (unparsable cells become missing)
//! - Defining the in-memory record types

pub mod results_csv;
pub mod schema;

// Re-export main types
pub use results_csv::{load_results, parse_numeric, parse_results};
pub use schema::{Percentage, ResultRecord};
