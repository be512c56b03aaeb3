//! Revenue regression page
//!
//! Revenue is regressed on one feature after the IQR filter has removed
//! outliers from all three numeric columns.

use gamesales_io::{NumericColumn, NumericRecord, RawRecord, RawTable};
use gamesales_stats::{correlation_matrix, covariance, pearson, LinearFit};
use serde::{Deserialize, Serialize};

use crate::chart::{Chart, ChartKind, Point, Series};
use crate::outlier::filter_iqr;
use crate::selector::RegressionFeature;

/// Column order the IQR filter is applied in
pub const FILTER_ORDER: [NumericColumn; 3] = [
    NumericColumn::ReviewsTotal,
    NumericColumn::LaunchPrice,
    NumericColumn::RevenueEstimated,
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<NumericColumn>,
    /// `values[i][j]` pairs `columns[i]` with `columns[j]`
    pub values: Vec<Vec<Option<f64>>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionView {
    pub feature: RegressionFeature,
    /// Rows left after the IQR filter
    pub rows_used: usize,
    pub chart: Chart,
    pub fit: Option<LinearFit>,
    pub covariance: Option<f64>,
    pub correlation: Option<f64>,
    pub correlation_matrix: CorrelationMatrix,
    pub equation: Option<String>,
    pub interpretation: Option<String>,
}

fn column_of(rows: &[&RawRecord], column: NumericColumn) -> Vec<f64> {
    rows.iter().filter_map(|r| r.numeric(column)).collect()
}

pub fn regression_view(raw: &RawTable, feature: RegressionFeature) -> RegressionView {
    let rows = filter_iqr(raw.complete(&NumericColumn::ALL), &FILTER_ORDER);

    let x = column_of(&rows, feature.column());
    let y = column_of(&rows, NumericColumn::RevenueEstimated);
    let fit = LinearFit::fit(&x, &y);

    let scatter: Vec<Point> = x.iter().zip(&y).map(|(&a, &b)| Point::new(a, b)).collect();
    let mut chart = Chart::new(
        ChartKind::ScatterWithFit,
        format!("Revenue Estimated vs {}", feature),
        feature.to_string(),
        NumericColumn::RevenueEstimated.display_name(),
    )
    .with_series(Series::new("Data", ChartKind::Scatter, scatter));

    if let Some(fit) = &fit {
        let mut xs = x.clone();
        xs.sort_by(f64::total_cmp);
        let line = xs.iter().map(|&v| Point::new(v, fit.predict(v))).collect();
        chart = chart.with_series(Series::new("Regression Line", ChartKind::Line, line));
    }

    let columns = NumericColumn::ALL.to_vec();
    let data: Vec<Vec<f64>> = columns.iter().map(|&c| column_of(&rows, c)).collect();
    let correlation_matrix = CorrelationMatrix {
        columns,
        values: correlation_matrix(&data),
    };

    let equation = fit.map(|f| {
        format!(
            "{} = {:.2} + {:.2} × {}",
            NumericColumn::RevenueEstimated.display_name(),
            f.intercept,
            f.slope,
            feature
        )
    });
    let interpretation = fit.map(|f| {
        format!(
            "Based on the model, {} an estimated increase of {:.2} in revenue.",
            feature.slope_phrase(),
            f.slope
        )
    });

    RegressionView {
        feature,
        rows_used: rows.len(),
        chart,
        fit,
        covariance: covariance(&x, &y),
        correlation: pearson(&x, &y),
        correlation_matrix,
        equation,
        interpretation,
    }
}
