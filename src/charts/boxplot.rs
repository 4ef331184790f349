//! Distribution view: one box plot per method.
//!
//! Each box shows the spread of the per-function mean pass rates for one
//! percentage category. Categories are fixed and ordered; data outside them
//! is not plotted and categories without data stay empty.

use super::{percent_label, Chart, TickedRange, AXIS_DESC_FONT, LABEL_FONT, TITLE_FONT};
use crate::aggregator::FunctionMean;
use crate::parser::schema::Percentage;
use crate::utils::config::{CANVAS_SIZE, Y_RANGE};
use crate::utils::error::ChartError;
use log::debug;
use plotters::coord::Shift;
use plotters::prelude::*;

/// Half the box width, in category units
const BOX_HALF_WIDTH: f64 = 0.4;
const CAP_HALF_WIDTH: f64 = 0.2;
const WHISKER_IQR_FACTOR: f64 = 1.5;

/// Five-number summary plus outliers
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub lower_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
}

impl BoxStats {
    /// Summarize a set of values
    ///
    /// Quartiles use linear interpolation between order statistics. Whiskers
    /// reach the most extreme values within 1.5 IQR of the box; anything
    /// beyond is an outlier. Returns `None` for an empty set.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let q1 = percentile_of_sorted(&sorted, 0.25);
        let median = percentile_of_sorted(&sorted, 0.5);
        let q3 = percentile_of_sorted(&sorted, 0.75);
        let iqr = q3 - q1;
        let low_fence = q1 - WHISKER_IQR_FACTOR * iqr;
        let high_fence = q3 + WHISKER_IQR_FACTOR * iqr;

        let within = |v: &f64| *v >= low_fence && *v <= high_fence;
        let lower_whisker = sorted.iter().copied().find(|v| within(v)).unwrap_or(q1);
        let upper_whisker = sorted.iter().copied().rev().find(|v| within(v)).unwrap_or(q3);
        let outliers = sorted.iter().copied().filter(|v| !within(v)).collect();

        Some(Self {
            lower_whisker,
            q1,
            median,
            q3,
            upper_whisker,
            outliers,
        })
    }
}

/// Percentile (0..=1) of a non-empty sorted slice
fn percentile_of_sorted(sorted: &[f64], p: f64) -> f64 {
    let pos = p * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

/// Data for one x-axis category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBox {
    pub percentage: Percentage,

    /// Defined function means in this category
    pub values: Vec<f64>,

    /// `None` when the category has no data
    pub stats: Option<BoxStats>,
}

impl CategoryBox {
    /// Axis label, e.g. `25%`
    pub fn label(&self) -> String {
        format!("{}%", self.percentage)
    }
}

/// Bucket function means into the fixed categories
///
/// **Public** - pure data preparation for the box plot
///
/// Returns one entry per category in `order`, in that order. Means whose
/// percentage is not in `order`, and undefined means, are dropped.
pub fn prepare_categories<'a, I>(means: I, order: &[f64]) -> Vec<CategoryBox>
where
    I: IntoIterator<Item = &'a FunctionMean>,
{
    let mut categories: Vec<CategoryBox> = order
        .iter()
        .filter_map(|v| Percentage::new(*v))
        .map(|percentage| CategoryBox {
            percentage,
            values: Vec::new(),
            stats: None,
        })
        .collect();

    let mut outside = 0usize;
    for fm in means {
        match categories.iter_mut().find(|c| c.percentage == fm.percentage) {
            Some(category) => category.values.extend(fm.mean),
            None => outside += 1,
        }
    }

    if outside > 0 {
        debug!("{} function means fall outside the plotted categories", outside);
    }

    for category in &mut categories {
        category.stats = BoxStats::from_values(&category.values);
    }

    categories
}

/// Text and size settings for a box plot
#[derive(Debug, Clone)]
pub struct BoxplotConfig {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub size: (u32, u32),
}

impl Default for BoxplotConfig {
    fn default() -> Self {
        Self {
            title: "Effektivität der Methode bei der Synthese".to_string(),
            x_desc: "Synthese-Beispiele".to_string(),
            y_desc: "Verifikation bestanden".to_string(),
            size: CANVAS_SIZE,
        }
    }
}

impl BoxplotConfig {
    /// Config titled for one method label, e.g. "Baseline"
    pub fn for_method(label: &str) -> Self {
        Self {
            title: format!("Effektivität der {}-Methode bei der Synthese", label),
            ..Self::default()
        }
    }
}

/// A ready-to-draw box plot
#[derive(Debug, Clone)]
pub struct BoxplotChart {
    pub categories: Vec<CategoryBox>,
    pub config: BoxplotConfig,
}

impl BoxplotChart {
    pub fn new(categories: Vec<CategoryBox>, config: BoxplotConfig) -> Self {
        Self { categories, config }
    }
}

impl Chart for BoxplotChart {
    fn size(&self) -> (u32, u32) {
        self.config.size
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<(), ChartError> {
        root.fill(&WHITE)?;

        let count = self.categories.len();
        let centers: Vec<f64> = (0..count).map(|i| i as f64).collect();
        let labels: Vec<String> = self.categories.iter().map(CategoryBox::label).collect();

        let mut chart = ChartBuilder::on(root)
            .caption(&self.config.title, TITLE_FONT)
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(TickedRange::new(-0.5..count as f64 - 0.5, centers), Y_RANGE)?;

        let x_formatter = |x: &f64| {
            let idx = x.round();
            if (x - idx).abs() < 1e-6 && idx >= 0.0 {
                labels.get(idx as usize).cloned().unwrap_or_default()
            } else {
                String::new()
            }
        };

        chart
            .configure_mesh()
            .disable_mesh()
            .y_labels(6)
            .x_label_formatter(&x_formatter)
            .y_label_formatter(&percent_label)
            .x_desc(self.config.x_desc.as_str())
            .y_desc(self.config.y_desc.as_str())
            .axis_desc_style(AXIS_DESC_FONT)
            .label_style(LABEL_FONT)
            .draw()?;

        for (i, category) in self.categories.iter().enumerate() {
            let Some(stats) = &category.stats else {
                continue;
            };
            let x = i as f64;
            let fill = HSLColor(i as f64 / count as f64, 0.65, 0.65);
            let line = BLACK.mix(0.75).stroke_width(1);

            chart.draw_series(std::iter::once(Rectangle::new(
                [(x - BOX_HALF_WIDTH, stats.q1), (x + BOX_HALF_WIDTH, stats.q3)],
                fill.filled(),
            )))?;
            chart.draw_series(std::iter::once(Rectangle::new(
                [(x - BOX_HALF_WIDTH, stats.q1), (x + BOX_HALF_WIDTH, stats.q3)],
                line,
            )))?;

            let segments = [
                vec![(x - BOX_HALF_WIDTH, stats.median), (x + BOX_HALF_WIDTH, stats.median)],
                vec![(x, stats.q3), (x, stats.upper_whisker)],
                vec![(x, stats.q1), (x, stats.lower_whisker)],
                vec![
                    (x - CAP_HALF_WIDTH, stats.upper_whisker),
                    (x + CAP_HALF_WIDTH, stats.upper_whisker),
                ],
                vec![
                    (x - CAP_HALF_WIDTH, stats.lower_whisker),
                    (x + CAP_HALF_WIDTH, stats.lower_whisker),
                ],
            ];
            chart.draw_series(
                segments
                    .into_iter()
                    .map(|points| PathElement::new(points, line)),
            )?;

            chart.draw_series(
                stats
                    .outliers
                    .iter()
                    .map(|v| Circle::new((x, *v), 3, line)),
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{render_svg, svg_has_label};
    use crate::utils::config::PERCENTAGE_CATEGORIES;

    fn function_mean(function: &str, percentage: f64, mean: Option<f64>) -> FunctionMean {
        FunctionMean {
            function: function.to_string(),
            method: "baseline".to_string(),
            percentage: Percentage::new(percentage).unwrap(),
            mean,
            samples: 1,
        }
    }

    #[test]
    fn test_box_stats_quartiles() {
        let stats = BoxStats::from_values(&[10.0, 20.0, 30.0, 40.0, 50.0]).unwrap();

        assert_eq!(stats.q1, 20.0);
        assert_eq!(stats.median, 30.0);
        assert_eq!(stats.q3, 40.0);
        assert_eq!(stats.lower_whisker, 10.0);
        assert_eq!(stats.upper_whisker, 50.0);
        assert!(stats.outliers.is_empty());
    }

    #[test]
    fn test_box_stats_interpolates() {
        let stats = BoxStats::from_values(&[0.0, 100.0]).unwrap();

        assert_eq!(stats.q1, 25.0);
        assert_eq!(stats.median, 50.0);
        assert_eq!(stats.q3, 75.0);
    }

    #[test]
    fn test_box_stats_outliers() {
        let stats = BoxStats::from_values(&[50.0, 51.0, 52.0, 53.0, 54.0, 0.0]).unwrap();

        assert_eq!(stats.outliers, vec![0.0]);
        assert_eq!(stats.lower_whisker, 50.0);
    }

    #[test]
    fn test_box_stats_empty() {
        assert!(BoxStats::from_values(&[]).is_none());
    }

    #[test]
    fn test_prepare_categories_fixed_order() {
        let means = vec![
            function_mean("f1", 50.0, Some(80.0)),
            function_mean("f2", 50.0, Some(60.0)),
            function_mean("f1", 40.0, Some(10.0)),
        ];

        let categories = prepare_categories(&means, &PERCENTAGE_CATEGORIES);

        let labels: Vec<String> = categories.iter().map(CategoryBox::label).collect();
        assert_eq!(labels, vec!["25%", "37%", "50%", "62%", "75%", "87%", "100%"]);
        assert_eq!(categories[2].values, vec![80.0, 60.0]);
        assert!(categories[2].stats.is_some());
        assert!(categories
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != 2)
            .all(|(_, c)| c.stats.is_none()));
    }

    #[test]
    fn test_prepare_categories_skips_undefined_means() {
        let means = vec![function_mean("f1", 25.0, None)];

        let categories = prepare_categories(&means, &PERCENTAGE_CATEGORIES);

        assert!(categories[0].values.is_empty());
        assert!(categories[0].stats.is_none());
    }

    fn rendered(categories: Vec<CategoryBox>) -> String {
        let chart = BoxplotChart::new(categories, BoxplotConfig::for_method("Baseline"));
        render_svg(&chart).unwrap()
    }

    #[test]
    fn test_render_labels_fixed_categories() {
        let means = vec![
            function_mean("f1", 50.0, Some(80.0)),
            function_mean("f2", 50.0, Some(60.0)),
            function_mean("f1", 33.0, Some(10.0)),
        ];

        let svg = rendered(prepare_categories(&means, &PERCENTAGE_CATEGORIES));

        for label in ["25%", "37%", "50%", "62%", "75%", "87%", "100%"] {
            assert!(svg_has_label(&svg, label), "missing x label {}", label);
        }
        assert!(!svg_has_label(&svg, "33%"));
        assert!(svg_has_label(&svg, "Effektivität der Baseline-Methode bei der Synthese"));
    }

    #[test]
    fn test_render_without_data() {
        let svg = rendered(prepare_categories(std::iter::empty(), &PERCENTAGE_CATEGORIES));

        assert!(svg.contains("<svg"));
        assert!(svg_has_label(&svg, "87%"));
    }

    #[test]
    fn test_config_title() {
        let config = BoxplotConfig::for_method("Baseline");
        assert_eq!(config.title, "Effektivität der Baseline-Methode bei der Synthese");
        assert_eq!(config.size, (1000, 600));
    }
}
