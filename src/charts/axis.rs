//! Numeric axis with caller-chosen tick positions.
//!
//! Plotters picks "nice" key points for plain `f64` ranges, which never land
//! on category centers or on values like 37 and 62.

use plotters::coord::ranged1d::{DefaultFormatting, KeyPointHint, Ranged};
use std::ops::Range;

/// Linear `f64` axis whose labels sit exactly on `ticks`
#[derive(Debug, Clone, PartialEq)]
pub struct TickedRange {
    range: Range<f64>,
    ticks: Vec<f64>,
}

impl TickedRange {
    /// Ticks outside the range are discarded
    pub fn new(range: Range<f64>, ticks: Vec<f64>) -> Self {
        let ticks = ticks
            .into_iter()
            .filter(|t| *t >= range.start && *t <= range.end)
            .collect();
        Self { range, ticks }
    }

    pub fn ticks(&self) -> &[f64] {
        &self.ticks
    }
}

impl Ranged for TickedRange {
    type FormatOption = DefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        let span = self.range.end - self.range.start;
        let pixels = limit.1 - limit.0;
        if span == 0.0 || pixels == 0 {
            return limit.0;
        }

        let fraction = (value - self.range.start) / span;
        limit.0 + (pixels as f64 * fraction + 1e-3).floor() as i32
    }

    fn key_points<Hint: KeyPointHint>(&self, _hint: Hint) -> Vec<f64> {
        self.ticks.clone()
    }

    fn range(&self) -> Range<f64> {
        self.range.clone()
    }
}
