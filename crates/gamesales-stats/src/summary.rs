//! Summary statistics for a numeric column
//!
//! Provides the descriptive measures shown for a single column:
//! - Mean, median, quartiles, range
//! - Sample variance and standard deviation
//! - 95% confidence interval for the mean, 3-sigma band, outlier bounds

use crate::outlier::IqrFence;
use crate::quantile::{quantile_sorted, sorted_finite};
use serde::{Deserialize, Serialize};

/// Standard normal quantile at 0.975, for two-sided 95% intervals
pub const Z_975: f64 = 1.959964;

/// A closed numeric interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub lower: f64,
    pub upper: f64,
}

impl Interval {
    /// Interval from `lower` to `upper`, unchecked
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Interval `center ± half_width`
    pub fn around(center: f64, half_width: f64) -> Self {
        Self::new(center - half_width, center + half_width)
    }

    /// `upper - lower`; negative if the bounds are swapped
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// Summary statistics for a numeric dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of finite values
    pub count: usize,
    /// Number of missing/NaN values
    pub missing: usize,
    pub min: f64,
    pub max: f64,
    /// `max - min`
    pub range: f64,
    pub mean: f64,
    pub median: f64,
    /// 25th percentile
    pub q1: f64,
    /// 75th percentile
    pub q3: f64,
    pub iqr: f64,
    /// Sample variance (n - 1), undefined for a single value
    pub variance: Option<f64>,
    /// Sample standard deviation, undefined for a single value
    pub std_dev: Option<f64>,
    /// 95% confidence interval for the mean
    pub ci95: Option<Interval>,
    /// `mean ± 3 * std_dev`
    pub three_sigma: Option<Interval>,
    /// `[q1 - 1.5 * iqr, q3 + 1.5 * iqr]`
    pub outlier_bounds: Interval,
}

impl Summary {
    /// Compute summary statistics, `None` when no finite value is present
    pub fn from_values(data: &[f64]) -> Option<Self> {
        let sorted = sorted_finite(data);
        let missing = data.len() - sorted.len();
        if sorted.is_empty() {
            return None;
        }

        let count = sorted.len();
        let n = count as f64;
        let mean = sorted.iter().sum::<f64>() / n;

        let variance = (count > 1)
            .then(|| sorted.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0));
        let std_dev = variance.map(f64::sqrt);

        let min = sorted[0];
        let max = sorted[count - 1];
        let median = quantile_sorted(&sorted, 0.5)?;
        let fence = IqrFence::from_sorted(&sorted)?;

        let ci95 = std_dev.map(|s| Interval::around(mean, Z_975 * s / n.sqrt()));
        let three_sigma = std_dev.map(|s| Interval::around(mean, 3.0 * s));

        Some(Self {
            count,
            missing,
            min,
            max,
            range: max - min,
            mean,
            median,
            q1: fence.q1,
            q3: fence.q3,
            iqr: fence.iqr,
            variance,
            std_dev,
            ci95,
            three_sigma,
            outlier_bounds: Interval::new(fence.lower, fence.upper),
        })
    }

    /// Standard error of the mean
    pub fn standard_error(&self) -> Option<f64> {
        self.std_dev.map(|s| s / (self.count as f64).sqrt())
    }
}

/// Data for drawing a box plot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxPlot {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Smallest value inside the lower fence
    pub lower_whisker: f64,
    /// Largest value inside the upper fence
    pub upper_whisker: f64,
    /// Values beyond the fences, empty unless requested
    pub outliers: Vec<f64>,
    /// How many values lie beyond the fences
    pub outlier_count: usize,
}

impl BoxPlot {
    pub fn from_values(data: &[f64], show_outliers: bool) -> Option<Self> {
        let sorted = sorted_finite(data);
        let fence = IqrFence::from_sorted(&sorted)?;
        let median = quantile_sorted(&sorted, 0.5)?;

        let (inside, outside): (Vec<f64>, Vec<f64>) =
            sorted.iter().partition(|&&v| fence.contains(v));
        // q1..q3 always holds at least one value, so `inside` is never empty
        let lower_whisker = inside.first().copied().unwrap_or(fence.q1);
        let upper_whisker = inside.last().copied().unwrap_or(fence.q3);

        Some(Self {
            q1: fence.q1,
            median,
            q3: fence.q3,
            lower_whisker,
            upper_whisker,
            outlier_count: outside.len(),
            outliers: if show_outliers { outside } else { Vec::new() },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_example() {
        let s = Summary::from_values(&[10.0, 20.0, 30.0, 40.0, 50.0]).unwrap();
        assert_eq!(s.count, 5);
        assert!((s.mean - 30.0).abs() < 1e-12);
        assert!((s.median - 30.0).abs() < 1e-12);
        assert!((s.variance.unwrap() - 250.0).abs() < 1e-9);
        assert!((s.std_dev.unwrap() - 15.811388).abs() < 1e-5);
        assert!((s.range - 40.0).abs() < 1e-12);
        assert_eq!(s.q1, 20.0);
        assert_eq!(s.q3, 40.0);
        assert_eq!(s.outlier_bounds, Interval::new(-10.0, 70.0));
    }

    #[test]
    fn test_confidence_interval() {
        let s = Summary::from_values(&[10.0, 20.0, 30.0, 40.0, 50.0]).unwrap();
        let ci = s.ci95.unwrap();
        let half = Z_975 * 250f64.sqrt() / 5f64.sqrt();
        assert!((ci.lower - (30.0 - half)).abs() < 1e-9);
        assert!((ci.upper - (30.0 + half)).abs() < 1e-9);

        let band = s.three_sigma.unwrap();
        assert!((band.width() - 6.0 * s.std_dev.unwrap()).abs() < 1e-9);
    }

    #[test]
    fn test_single_value_has_no_spread() {
        let s = Summary::from_values(&[7.0]).unwrap();
        assert_eq!(s.mean, 7.0);
        assert_eq!(s.variance, None);
        assert_eq!(s.std_dev, None);
        assert_eq!(s.ci95, None);
        assert_eq!(s.three_sigma, None);
        assert_eq!(s.standard_error(), None);
    }

    #[test]
    fn test_zero_variance() {
        let s = Summary::from_values(&[4.0, 4.0, 4.0]).unwrap();
        assert_eq!(s.variance, Some(0.0));
        assert_eq!(s.std_dev, Some(0.0));
        assert_eq!(s.ci95, Some(Interval::new(4.0, 4.0)));
    }

    #[test]
    fn test_missing_values_counted() {
        let s = Summary::from_values(&[1.0, f64::NAN, 3.0]).unwrap();
        assert_eq!(s.count, 2);
        assert_eq!(s.missing, 1);
        assert!(Summary::from_values(&[f64::NAN]).is_none());
        assert!(Summary::from_values(&[]).is_none());
    }

    #[test]
    fn test_box_plot() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
        let hidden = BoxPlot::from_values(&data, false).unwrap();
        assert_eq!(hidden.lower_whisker, 1.0);
        assert_eq!(hidden.upper_whisker, 9.0);
        assert_eq!(hidden.outlier_count, 1);
        assert!(hidden.outliers.is_empty());

        let shown = BoxPlot::from_values(&data, true).unwrap();
        assert_eq!(shown.outliers, vec![100.0]);
    }
}
