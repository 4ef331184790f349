//! Verification pass-rate derivation and mean helpers.
//!
//! The pass rate of a record is `passed / (passed + failed) * 100`. It is
//! undefined (`None`) when either count is missing or both are zero; undefined
//! rates are left out of every mean instead of poisoning it.

use crate::parser::schema::ResultRecord;
use log::debug;

/// Compute the verification pass rate for one pair of counts
///
/// **Public** - core metric
///
/// # Returns
/// Percentage in [0, 100] for non-negative counts, `None` if undefined
pub fn verification_passed(passed: Option<f64>, failed: Option<f64>) -> Option<f64> {
    let (passed, failed) = (passed?, failed?);
    let total = passed + failed;

    if total == 0.0 {
        return None;
    }

    Some(passed / total * 100.0)
}

/// Derive the pass rate for every record, in input order
///
/// **Public** - used by the grouping stage
pub fn derive_metrics(records: &[ResultRecord]) -> Vec<Option<f64>> {
    let metrics: Vec<Option<f64>> = records
        .iter()
        .map(|r| verification_passed(r.passed, r.failed))
        .collect();

    let undefined = metrics.iter().filter(|m| m.is_none()).count();
    if undefined > 0 {
        debug!("{} of {} records have an undefined pass rate", undefined, records.len());
    }

    metrics
}

/// Arithmetic mean over the present values
///
/// Returns `None` when no value is present.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (sum, count) = values
        .into_iter()
        .flatten()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
