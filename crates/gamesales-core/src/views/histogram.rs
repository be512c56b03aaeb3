//! Histograms for the home page
//!
//! Launch price uses fixed $5 bins. Revenue and review counts span several
//! orders of magnitude, so they are binned on `ln(1 + x)`.

use gamesales_io::{GameTable, NumericColumn};
use gamesales_stats::Histogram;
use serde::{Deserialize, Serialize};

use crate::config::HistogramConfig;
use crate::error::DashboardResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramView {
    pub column: NumericColumn,
    pub title: String,
    pub x_label: String,
    /// Whether values were transformed with `ln(1 + x)`
    pub log_scale: bool,
    pub histogram: Histogram,
}

pub fn histogram_view(
    table: &GameTable,
    column: NumericColumn,
    config: &HistogramConfig,
) -> DashboardResult<HistogramView> {
    let values = table.column_values(column);

    let view = match column {
        NumericColumn::LaunchPrice => HistogramView {
            column,
            title: "Histogram of Launch Price".to_string(),
            x_label: "Launch Price".to_string(),
            log_scale: false,
            histogram: Histogram::fixed(
                &values,
                config.price_start,
                config.price_end,
                config.price_width,
            )?,
        },
        NumericColumn::RevenueEstimated | NumericColumn::ReviewsTotal => {
            let logged: Vec<f64> = values.iter().map(|v| v.ln_1p()).collect();
            HistogramView {
                column,
                title: format!("Histogram of {} (Log Scale)", column.display_name()),
                x_label: format!("Log({})", column.display_name()),
                log_scale: true,
                histogram: Histogram::equal_width(&logged, config.log_bins)?,
            }
        }
    };
    Ok(view)
}
