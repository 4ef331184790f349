//! Chart rendering for the distribution and trend views.
//!
//! Every chart draws onto a generic plotters backend, so the same drawing
//! code can write a PNG file or fill an in-memory SVG string.

pub mod axis;
pub mod boxplot;
pub mod trend;

pub use axis::TickedRange;
pub use boxplot::{prepare_categories, BoxStats, BoxplotChart, BoxplotConfig, CategoryBox};
pub use trend::{prepare_series, TrendChart, TrendConfig, TrendSeries};

use crate::utils::error::ChartError;
use log::debug;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// Something that can draw itself onto any plotters backend
pub trait Chart {
    /// Canvas size in pixels
    fn size(&self) -> (u32, u32);

    /// Draw onto a blank drawing area
    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<(), ChartError>;
}

/// Render a chart straight to a PNG file
///
/// **Public** - file sink for the bitmap backend
pub fn render_png<C: Chart>(chart: &C, path: &Path) -> Result<(), ChartError> {
    debug!("Rendering PNG to {}", path.display());

    let root = BitMapBackend::new(path, chart.size()).into_drawing_area();
    chart.draw(&root)?;
    root.present()?;

    Ok(())
}

/// Render a chart into an SVG string
///
/// **Public** - in-memory sink, nothing touches the filesystem
pub fn render_svg<C: Chart>(chart: &C) -> Result<String, ChartError> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, chart.size()).into_drawing_area();
        chart.draw(&root)?;
        root.present()?;
    }

    debug!("Rendered SVG ({} bytes)", svg.len());
    Ok(svg)
}

/// Y axis tick label, e.g. `40%`
pub(crate) fn percent_label(value: &f64) -> String {
    format!("{:.0}%", value)
}

// Font sizes in pixels
pub(crate) const TITLE_FONT: (&str, u32) = ("sans-serif", 22);
pub(crate) const AXIS_DESC_FONT: (&str, u32) = ("sans-serif", 18);
pub(crate) const LABEL_FONT: (&str, u32) = ("sans-serif", 14);

/// Whether a rendered SVG draws `text` as a standalone label
#[cfg(test)]
pub(crate) fn svg_has_label(svg: &str, text: &str) -> bool {
    svg.contains(&format!(">\n{}\n</text>", text))
}
