//! Normal distribution fit for visualising log-transformed columns

use serde::{Deserialize, Serialize};
use statrs::distribution::{Continuous, ContinuousCDF, Normal};

/// Maximum-likelihood normal fit
///
/// The standard deviation uses the population (n) denominator, which is
/// the maximum-likelihood estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalFit {
    pub mean: f64,
    pub std_dev: f64,
    /// Smallest fitted value
    pub min: f64,
    /// Largest fitted value
    pub max: f64,
}

impl NormalFit {
    /// Fit the finite values; `None` for fewer than two values or zero spread
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let finite: Vec<f64> = values.iter().copied().filter(|x| x.is_finite()).collect();
        if finite.len() < 2 {
            return None;
        }

        let n = finite.len() as f64;
        let mean = finite.iter().sum::<f64>() / n;
        let variance = finite.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        let std_dev = variance.sqrt();
        if !(std_dev > 0.0) {
            return None;
        }

        let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            mean,
            std_dev,
            min,
            max,
        })
    }

    fn dist(&self) -> Option<Normal> {
        Normal::new(self.mean, self.std_dev).ok()
    }

    /// Probability density at `x`
    pub fn pdf(&self, x: f64) -> f64 {
        self.dist().map(|d| d.pdf(x)).unwrap_or(f64::NAN)
    }

    /// P(X <= x)
    pub fn cdf(&self, x: f64) -> f64 {
        self.dist().map(|d| d.cdf(x)).unwrap_or(f64::NAN)
    }

    /// P(lo < X < hi)
    pub fn prob_between(&self, lo: f64, hi: f64) -> f64 {
        self.cdf(hi) - self.cdf(lo)
    }

    /// Fitted density at `points` evenly spaced values from min to max
    pub fn curve(&self, points: usize) -> Vec<(f64, f64)> {
        linspace(self.min, self.max, points)
            .into_iter()
            .map(|x| (x, self.pdf(x)))
            .collect()
    }
}

/// `n` evenly spaced values from `start` to `end` inclusive
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + i as f64 * step).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_uses_population_std() {
        let fit = NormalFit::from_values(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!((fit.mean - 5.0).abs() < 1e-12);
        assert!((fit.std_dev - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_cdf_and_pdf() {
        let fit = NormalFit::from_values(&[-1.0, 1.0]).unwrap();
        // mean 0, std 1
        assert!((fit.cdf(0.0) - 0.5).abs() < 1e-12);
        assert!((fit.cdf(1.959964) - 0.975).abs() < 1e-6);
        assert!((fit.pdf(0.0) - 0.398_942_280_4).abs() < 1e-9);
        assert!((fit.prob_between(-1.0, 1.0) - 0.682_689_49).abs() < 1e-6);
    }

    #[test]
    fn test_curve_spans_data() {
        let fit = NormalFit::from_values(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        let curve = fit.curve(100);
        assert_eq!(curve.len(), 100);
        assert_eq!(curve[0].0, 1.0);
        assert!((curve[99].0 - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_fit() {
        assert!(NormalFit::from_values(&[1.0]).is_none());
        assert!(NormalFit::from_values(&[3.0, 3.0, 3.0]).is_none());
    }

    #[test]
    fn test_linspace() {
        assert_eq!(linspace(0.0, 1.0, 3), vec![0.0, 0.5, 1.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }
}
