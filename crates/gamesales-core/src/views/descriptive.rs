//! Descriptive statistics page
//!
//! Works on the raw table: only the selected column is coerced, so rows
//! missing other fields still count here.

use gamesales_io::{NumericColumn, RawTable};
use gamesales_stats::{BoxPlot, Summary};
use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};
use crate::format::{format_opt, format_thousands, Measure};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveView {
    pub column: NumericColumn,
    pub summary: Summary,
    /// Mean and median
    pub central_tendency: Vec<Measure>,
    /// Range, variance, standard deviation
    pub dispersion: Vec<Measure>,
    /// Q1, median, Q3
    pub quartiles: Vec<Measure>,
    /// IQR and the median ± IQR band
    pub spread: Vec<Measure>,
    /// Lower and upper outlier bounds
    pub outlier_bounds: Vec<Measure>,
    /// "mean ± 3σ" sentence, absent without a standard deviation
    pub three_sigma: Option<String>,
    /// "lower to upper", absent for a single value
    pub confidence_interval: Option<String>,
    pub box_plot: BoxPlot,
}

impl DescriptiveView {
    /// Every measure as one flat name/value list
    pub fn statistics(&self) -> Vec<Measure> {
        let mut all = Vec::new();
        all.extend(self.central_tendency.iter().cloned());
        all.extend(self.dispersion.iter().cloned());
        all.extend(self.quartiles.iter().cloned());
        all.extend(self.spread.iter().cloned());
        all.extend(self.outlier_bounds.iter().cloned());
        all.push(Measure::new(
            "95% Confidence Interval",
            self.confidence_interval
                .clone()
                .unwrap_or_else(|| format_opt(None)),
        ));
        all
    }
}

pub fn descriptive_view(
    raw: &RawTable,
    column: NumericColumn,
    show_outliers: bool,
) -> DashboardResult<DescriptiveView> {
    let values = raw.column_values(column);
    let no_data = || DashboardError::NoData(column.display_name().to_string());
    let summary = Summary::from_values(&values).ok_or_else(no_data)?;
    let box_plot = BoxPlot::from_values(&values, show_outliers).ok_or_else(no_data)?;

    let f = |v: f64| format_thousands(v, 2);

    let central_tendency = vec![
        Measure::new("Mean", f(summary.mean)),
        Measure::new("Median", f(summary.median)),
    ];
    let dispersion = vec![
        Measure::new("Range", f(summary.range)),
        Measure::new("Variance", format_opt(summary.variance)),
        Measure::new("Standard Deviation", format_opt(summary.std_dev)),
    ];
    let quartiles = vec![
        Measure::new("Q1 (25%)", f(summary.q1)),
        Measure::new("Q2 (Median)", f(summary.median)),
        Measure::new("Q3 (75%)", f(summary.q3)),
    ];
    let spread = vec![
        Measure::new("IQR", f(summary.iqr)),
        Measure::new(
            "Median ± IQR",
            format!("{} ± {}", f(summary.median), f(summary.iqr)),
        ),
    ];
    let outlier_bounds = vec![
        Measure::new("Lower", f(summary.outlier_bounds.lower)),
        Measure::new("Upper", f(summary.outlier_bounds.upper)),
    ];

    let three_sigma = summary.std_dev.map(|s| {
        format!(
            "{} lies between: {} ± {}",
            column.display_name(),
            f(summary.mean),
            f(3.0 * s)
        )
    });
    let confidence_interval = summary
        .ci95
        .map(|ci| format!("{} to {}", f(ci.lower), f(ci.upper)));

    Ok(DescriptiveView {
        column,
        summary,
        central_tendency,
        dispersion,
        quartiles,
        spread,
        outlier_bounds,
        three_sigma,
        confidence_interval,
        box_plot,
    })
}
