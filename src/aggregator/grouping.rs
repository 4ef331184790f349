//! Grouped means at two levels of granularity.
//!
//! Fine-grained: mean pass rate per `(function, method, percentage)`.
//! Coarse: mean of the fine-grained means per `(method, percentage)`, so every
//! function weighs the same regardless of how many rows it contributed.

use super::metrics::{derive_metrics, mean};
use crate::parser::schema::{Percentage, ResultRecord};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Mean pass rate of one function under one method and percentage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionMean {
    pub function: String,
    pub method: String,
    pub percentage: Percentage,

    /// `None` when no row in the group had a defined pass rate
    pub mean: Option<f64>,

    /// Rows that fell into the group
    pub samples: usize,
}

/// Mean over functions for one method and percentage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodMean {
    pub method: String,
    pub percentage: Percentage,

    /// Unweighted mean of the defined function means
    pub mean: Option<f64>,

    /// Function groups that fell into the group
    pub functions: usize,
}

/// Group records by `(function, method, percentage)`
///
/// **Public** - fine-grained aggregation
///
/// Rows missing any key component are not grouped. Output is sorted by key.
pub fn group_by_function(records: &[ResultRecord]) -> Vec<FunctionMean> {
    let metrics = derive_metrics(records);

    let mut groups: BTreeMap<(String, String, Percentage), Vec<Option<f64>>> = BTreeMap::new();
    let mut dropped = 0usize;

    for (record, metric) in records.iter().zip(metrics) {
        match (&record.function, &record.method, record.percentage) {
            (Some(function), Some(method), Some(percentage)) => {
                groups
                    .entry((function.clone(), method.clone(), percentage))
                    .or_default()
                    .push(metric);
            }
            _ => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!("{} records lack a grouping key and were not grouped", dropped);
    }

    let means: Vec<FunctionMean> = groups
        .into_iter()
        .map(|((function, method, percentage), metrics)| FunctionMean {
            function,
            method,
            percentage,
            samples: metrics.len(),
            mean: mean(metrics),
        })
        .collect();

    debug!("Built {} function groups", means.len());

    means
}

/// Group function means by `(method, percentage)`
///
/// **Public** - coarse aggregation (mean of means)
pub fn group_by_method(function_means: &[FunctionMean]) -> Vec<MethodMean> {
    let mut groups: BTreeMap<(&str, Percentage), Vec<Option<f64>>> = BTreeMap::new();

    for fm in function_means {
        groups
            .entry((fm.method.as_str(), fm.percentage))
            .or_default()
            .push(fm.mean);
    }

    groups
        .into_iter()
        .map(|((method, percentage), means)| MethodMean {
            method: method.to_string(),
            percentage,
            functions: means.len(),
            mean: mean(means),
        })
        .collect()
}

/// Sorted unique percentages present anywhere in the loaded table
///
/// **Public** - trend view x ticks
pub fn distinct_percentages(records: &[ResultRecord]) -> Vec<Percentage> {
    records
        .iter()
        .filter_map(|r| r.percentage)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct methods in sorted order
pub fn distinct_methods(method_means: &[MethodMean]) -> Vec<&str> {
    method_means
        .iter()
        .map(|m| m.method.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
