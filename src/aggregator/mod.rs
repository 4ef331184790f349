//! Aggregation of result records into pass-rate means.
//!
//! This module transforms loaded records into:
//! - Per-record verification pass rates
//! - Fine-grained means per function, method and percentage
//! - Coarse means per method and percentage

pub mod grouping;
pub mod metrics;

// Re-export main types and functions
pub use grouping::{
    distinct_methods, distinct_percentages, group_by_function, group_by_method, FunctionMean,
    MethodMean,
};
pub use metrics::{derive_metrics, mean, verification_passed};

use crate::parser::schema::{Percentage, ResultRecord};

/// Everything the renderers need, computed once per run
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Number of records loaded
    pub record_count: usize,

    /// Fine-grained means, sorted by key
    pub function_means: Vec<FunctionMean>,

    /// Coarse means, sorted by key
    pub method_means: Vec<MethodMean>,

    /// Distinct percentages of the raw table
    pub percentages: Vec<Percentage>,
}

impl Analysis {
    /// Run both aggregation stages over the loaded records
    pub fn from_records(records: &[ResultRecord]) -> Self {
        let function_means = group_by_function(records);
        let method_means = group_by_method(&function_means);

        Self {
            record_count: records.len(),
            percentages: distinct_percentages(records),
            function_means,
            method_means,
        }
    }

    /// Fine-grained means of one method
    pub fn function_means_for<'a>(
        &'a self,
        method: &'a str,
    ) -> impl Iterator<Item = &'a FunctionMean> + 'a {
        self.function_means.iter().filter(move |fm| fm.method == method)
    }
}
