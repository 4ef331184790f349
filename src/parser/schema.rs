//! In-memory representation of the results table.
//!
//! One `ResultRecord` per CSV row. Numeric cells that could not be parsed
//! are kept as `None` rather than rejected.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A synthesis-example percentage, usable as a grouping key
///
/// Always finite. `50` and `50.0` compare equal and hash the same.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub struct Percentage(f64);

impl Percentage {
    /// Wrap a value, rejecting NaN and infinities
    pub fn new(value: f64) -> Option<Self> {
        if value.is_finite() {
            // Fold -0.0 into 0.0 so both hash alike
            Some(Self(if value == 0.0 { 0.0 } else { value }))
        } else {
            None
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl PartialEq for Percentage {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Percentage {}

impl PartialOrd for Percentage {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Percentage {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for Percentage {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.0}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl From<Percentage> for f64 {
    fn from(p: Percentage) -> Self {
        p.0
    }
}

impl TryFrom<f64> for Percentage {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Percentage::new(value).ok_or_else(|| format!("percentage must be finite, got {}", value))
    }
}

/// One row of the results CSV
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultRecord {
    /// Function under synthesis (empty cell = missing)
    pub function: Option<String>,

    /// Synthesis method, normally "baseline" or "decomposition"
    pub method: Option<String>,

    /// Share of examples given to the synthesizer
    pub percentage: Option<Percentage>,

    /// Number of passed verification tests
    pub passed: Option<f64>,

    /// Number of failed verification tests
    pub failed: Option<f64>,
}

impl ResultRecord {
    /// Build a fully populated record
    pub fn new(function: &str, method: &str, percentage: f64, passed: f64, failed: f64) -> Self {
        Self {
            function: Some(function.to_string()),
            method: Some(method.to_string()),
            percentage: Percentage::new(percentage),
            passed: Some(passed),
            failed: Some(failed),
        }
    }
}
