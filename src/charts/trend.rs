//! Trend view: mean pass rate per method across percentages.
//!
//! One line per method found in the data. X tick labels sit at every distinct
//! percentage of the loaded table, even where no aggregated point exists.

use super::{Chart, TickedRange, AXIS_DESC_FONT, LABEL_FONT, TITLE_FONT};
use crate::aggregator::{distinct_methods, MethodMean};
use crate::parser::schema::Percentage;
use crate::utils::config::{CANVAS_SIZE, Y_RANGE};
use crate::utils::error::ChartError;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;

/// Points of one method, ordered by percentage
///
/// An undefined mean breaks the line, so the points are kept as contiguous
/// segments that are drawn separately.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    pub method: String,
    pub segments: Vec<Vec<(f64, f64)>>,
}

impl TrendSeries {
    /// All defined points across segments, in percentage order
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.segments.iter().flatten().copied()
    }
}

/// Split method means into one series per method
///
/// **Public** - pure data preparation for the line plot
///
/// Methods come out sorted. An undefined mean is not plotted and ends the
/// current segment.
pub fn prepare_series(method_means: &[MethodMean]) -> Vec<TrendSeries> {
    distinct_methods(method_means)
        .into_iter()
        .map(|method| {
            let mut rows: Vec<&MethodMean> =
                method_means.iter().filter(|m| m.method == method).collect();
            rows.sort_by_key(|m| m.percentage);

            let mut segments: Vec<Vec<(f64, f64)>> = Vec::new();
            let mut current = Vec::new();
            for row in rows {
                match row.mean {
                    Some(mean) => current.push((row.percentage.value(), mean)),
                    None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
                    None => {}
                }
            }
            if !current.is_empty() {
                segments.push(current);
            }

            TrendSeries {
                method: method.to_string(),
                segments,
            }
        })
        .collect()
}

/// X range covering every tick and point, padded on both sides
pub fn x_range(ticks: &[Percentage], series: &[TrendSeries]) -> Range<f64> {
    let xs = ticks
        .iter()
        .map(|t| t.value())
        .chain(series.iter().flat_map(|s| s.points().map(|p| p.0)));

    let (min, max) = xs.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
        (lo.min(x), hi.max(x))
    });

    if !min.is_finite() || !max.is_finite() {
        return 0.0..100.0;
    }

    let pad = if max > min { (max - min) * 0.05 } else { 5.0 };
    (min - pad)..(max + pad)
}

/// Text and size settings for the line plot
#[derive(Debug, Clone)]
pub struct TrendConfig {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub size: (u32, u32),
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            title: "Evaluierungsergebnisse der Effektivität nach Methode".to_string(),
            x_desc: "Synthese-Beispiele (%)".to_string(),
            y_desc: "Verifikation bestanden (%)".to_string(),
            size: CANVAS_SIZE,
        }
    }
}

/// A ready-to-draw line plot
#[derive(Debug, Clone)]
pub struct TrendChart {
    pub series: Vec<TrendSeries>,
    pub ticks: Vec<Percentage>,
    pub config: TrendConfig,
}

impl TrendChart {
    pub fn new(series: Vec<TrendSeries>, ticks: Vec<Percentage>, config: TrendConfig) -> Self {
        Self {
            series,
            ticks,
            config,
        }
    }
}

impl Chart for TrendChart {
    fn size(&self) -> (u32, u32) {
        self.config.size
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<(), ChartError> {
        root.fill(&WHITE)?;

        let key_points: Vec<f64> = self.ticks.iter().map(|t| t.value()).collect();
        let tick_formatter = |x: &f64| match Percentage::new(*x) {
            Some(p) => p.to_string(),
            None => String::new(),
        };

        let mut chart = ChartBuilder::on(root)
            .caption(&self.config.title, TITLE_FONT)
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(
                TickedRange::new(x_range(&self.ticks, &self.series), key_points),
                Y_RANGE,
            )?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .y_labels(6)
            .x_label_formatter(&tick_formatter)
            .x_desc(self.config.x_desc.as_str())
            .y_desc(self.config.y_desc.as_str())
            .axis_desc_style(AXIS_DESC_FONT)
            .label_style(LABEL_FONT)
            .draw()?;

        for (i, series) in self.series.iter().enumerate() {
            let color = Palette99::pick(i).to_rgba();
            let style = color.stroke_width(2);

            // Legend entry rides on the first segment, even when it is empty
            let mut segments = series.segments.iter();
            let first = segments.next().cloned().unwrap_or_default();
            chart
                .draw_series(LineSeries::new(first, style))?
                .label(series.method.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));

            for segment in segments {
                chart.draw_series(LineSeries::new(segment.clone(), style))?;
            }

            chart.draw_series(series.points().map(|p| Circle::new(p, 4, color.filled())))?;
        }

        if !self.series.is_empty() {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .label_font(LABEL_FONT)
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()?;
        }

        Ok(())
    }
}
