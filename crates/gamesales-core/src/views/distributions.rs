//! Probability distributions page
//!
//! Revenue and review counts are fitted with a normal distribution on
//! `ln(1 + x)`, i.e. a log-normal model of the raw values.

use gamesales_io::{NumericColumn, NumericRecord, RawTable};
use gamesales_stats::{Histogram, NormalFit};
use serde::{Deserialize, Serialize};

use crate::config::DistributionConfig;
use crate::error::DashboardResult;
use crate::format::{format_millions, Measure};

/// Fitted distribution of one log-transformed column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionView {
    pub column: NumericColumn,
    pub title: String,
    pub x_label: String,
    pub fit: NormalFit,
    pub histogram: Histogram,
    /// Histogram heights normalized to unit area
    pub densities: Vec<f64>,
    /// `(x, pdf(x))` of the fitted normal
    pub curve: Vec<(f64, f64)>,
    /// Mean (μ) and standard deviation (σ)
    pub measures: Vec<Measure>,
}

/// A probability read off the fitted revenue model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityEstimate {
    pub label: String,
    pub probability: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionsReport {
    /// Rows with both revenue and reviews present
    pub rows_used: usize,
    /// `None` when the column cannot be fitted
    pub revenue: Option<DistributionView>,
    pub reviews: Option<DistributionView>,
    pub revenue_probabilities: Vec<ProbabilityEstimate>,
}

fn distribution_view(
    column: NumericColumn,
    values: &[f64],
    config: &DistributionConfig,
) -> DashboardResult<Option<DistributionView>> {
    let Some(fit) = NormalFit::from_values(values) else {
        return Ok(None);
    };
    let histogram = Histogram::equal_width(values, config.bins)?;
    let densities = histogram.densities();
    let curve = fit.curve(config.curve_points);

    let (title, x_label) = match column {
        NumericColumn::ReviewsTotal => ("Reviews Distribution with Normal Fit", "Log Reviews"),
        _ => ("Revenue Distribution with Normal Fit", "Log Revenue"),
    };

    let measures = vec![
        Measure::new("Mean (μ)", format!("{:.2}", fit.mean)),
        Measure::new("Standard Deviation (σ)", format!("{:.2}", fit.std_dev)),
    ];

    Ok(Some(DistributionView {
        column,
        title: title.to_string(),
        x_label: x_label.to_string(),
        fit,
        histogram,
        densities,
        curve,
        measures,
    }))
}

fn revenue_probabilities(fit: &NormalFit, config: &DistributionConfig) -> Vec<ProbabilityEstimate> {
    let split = format_millions(config.revenue_split);
    let low = format_millions(config.revenue_band_low);
    let high = format_millions(config.revenue_band_high);

    let below = fit.cdf(config.revenue_split.ln_1p());
    let band = fit.prob_between(
        config.revenue_band_low.ln_1p(),
        config.revenue_band_high.ln_1p(),
    );

    vec![
        ProbabilityEstimate {
            label: format!("P(Revenue < {})", split),
            probability: below,
        },
        ProbabilityEstimate {
            label: format!("P(Revenue > {})", split),
            probability: 1.0 - below,
        },
        ProbabilityEstimate {
            label: format!("P({} < Revenue < {})", low, high),
            probability: band,
        },
    ]
}

pub fn distributions_report(
    raw: &RawTable,
    config: &DistributionConfig,
) -> DashboardResult<DistributionsReport> {
    let rows = raw.complete(&[NumericColumn::RevenueEstimated, NumericColumn::ReviewsTotal]);
    let logged = |column: NumericColumn| -> Vec<f64> {
        rows.iter()
            .filter_map(|r| r.numeric(column))
            .map(f64::ln_1p)
            .collect()
    };

    let revenue = distribution_view(
        NumericColumn::RevenueEstimated,
        &logged(NumericColumn::RevenueEstimated),
        config,
    )?;
    let reviews = distribution_view(
        NumericColumn::ReviewsTotal,
        &logged(NumericColumn::ReviewsTotal),
        config,
    )?;
    let revenue_probabilities = revenue
        .as_ref()
        .map(|v| revenue_probabilities(&v.fit, config))
        .unwrap_or_default();

    Ok(DistributionsReport {
        rows_used: rows.len(),
        revenue,
        reviews,
        revenue_probabilities,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamesales_io::RawRecord;

    fn record(revenue: Option<f64>, reviews: Option<f64>) -> RawRecord {
        RawRecord {
            title: "t".to_string(),
            launch_price: None,
            reviews_total: reviews,
            revenue_estimated: revenue,
            release_date: None,
        }
    }

    fn table() -> RawTable {
        let mut rows: Vec<RawRecord> = (1..=200)
            .map(|i| record(Some((i * 50_000) as f64), Some((i * 10) as f64)))
            .collect();
        rows.push(record(None, Some(5.0)));
        rows.push(record(Some(1.0), None));
        RawTable::new(rows)
    }

    #[test]
    fn test_report_uses_complete_rows() {
        let report = distributions_report(&table(), &DistributionConfig::default()).unwrap();
        assert_eq!(report.rows_used, 200);

        let revenue = report.revenue.unwrap();
        assert_eq!(revenue.histogram.total(), 200);
        assert_eq!(revenue.curve.len(), 100);
        assert_eq!(revenue.measures[0].measure, "Mean (μ)");
        assert!(report.reviews.is_some());
    }

    #[test]
    fn test_revenue_probabilities() {
        let report = distributions_report(&table(), &DistributionConfig::default()).unwrap();
        let p = &report.revenue_probabilities;
        assert_eq!(p.len(), 3);
        assert_eq!(p[0].label, "P(Revenue < $1.00M)");
        assert_eq!(p[2].label, "P($2.50M < Revenue < $7.50M)");
        assert!((p[0].probability + p[1].probability - 1.0).abs() < 1e-12);
        assert!(p.iter().all(|e| (0.0..=1.0).contains(&e.probability)));
    }

    #[test]
    fn test_unfittable_input() {
        let table = RawTable::new(vec![record(Some(10.0), Some(1.0))]);
        let report = distributions_report(&table, &DistributionConfig::default()).unwrap();
        assert!(report.revenue.is_none());
        assert!(report.revenue_probabilities.is_empty());
    }
}
