//! Covariance, correlation and one-feature least squares

use serde::{Deserialize, Serialize};

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sum of `(x - x̄)(y - ȳ)` over paired values
fn co_moment(x: &[f64], y: &[f64]) -> f64 {
    let (mx, my) = (mean(x), mean(y));
    x.iter().zip(y).map(|(a, b)| (a - mx) * (b - my)).sum()
}

/// Sample covariance (n - 1 denominator)
///
/// `None` when the slices differ in length or hold fewer than two pairs.
pub fn covariance(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }
    Some(co_moment(x, y) / (x.len() - 1) as f64)
}

/// Pearson correlation coefficient
///
/// `None` when either side has zero variance.
pub fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }
    let sxx = co_moment(x, x);
    let syy = co_moment(y, y);
    if sxx == 0.0 || syy == 0.0 {
        return None;
    }
    Some(co_moment(x, y) / (sxx * syy).sqrt())
}

/// Pairwise Pearson correlations between columns
///
/// Entry `[i][j]` is `None` where the correlation is undefined. The
/// diagonal is 1 for any column with non-zero variance.
pub fn correlation_matrix(columns: &[Vec<f64>]) -> Vec<Vec<Option<f64>>> {
    columns
        .iter()
        .map(|a| columns.iter().map(|b| pearson(a, b)).collect())
        .collect()
}

/// Ordinary least squares line `y = intercept + slope * x`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub intercept: f64,
    pub slope: f64,
    /// Number of points fitted
    pub n: usize,
}

impl LinearFit {
    /// Fit by closed-form least squares
    ///
    /// With no spread in `x` the slope is 0 and the intercept is the mean
    /// of `y`, the minimum-norm solution. `None` below two points.
    pub fn fit(x: &[f64], y: &[f64]) -> Option<Self> {
        if x.len() != y.len() || x.len() < 2 {
            return None;
        }
        let sxx = co_moment(x, x);
        let slope = if sxx == 0.0 { 0.0 } else { co_moment(x, y) / sxx };
        let intercept = mean(y) - slope * mean(x);
        Some(Self {
            intercept,
            slope,
            n: x.len(),
        })
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Coefficient of determination on the given data
    pub fn r_squared(&self, x: &[f64], y: &[f64]) -> Option<f64> {
        if x.len() != y.len() || x.is_empty() {
            return None;
        }
        let my = mean(y);
        let ss_tot: f64 = y.iter().map(|v| (v - my).powi(2)).sum();
        if ss_tot == 0.0 {
            return None;
        }
        let ss_res: f64 = x
            .iter()
            .zip(y)
            .map(|(a, b)| (b - self.predict(*a)).powi(2))
            .sum();
        Some(1.0 - ss_res / ss_tot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_line() {
        let x = vec![1.0, 2.0, 3.0, 4.0];
        let y: Vec<f64> = x.iter().map(|v| 3.0 + 2.0 * v).collect();
        let fit = LinearFit::fit(&x, &y).unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!((fit.intercept - 3.0).abs() < 1e-12);
        assert!((fit.predict(10.0) - 23.0).abs() < 1e-12);
        assert!((fit.r_squared(&x, &y).unwrap() - 1.0).abs() < 1e-12);
        assert!((pearson(&x, &y).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_covariance() {
        let x = vec![1.0, 2.0, 3.0];
        let y = vec![2.0, 4.0, 9.0];
        // means 2 and 5; co-moment (-1)(-3) + 0 + (1)(4) = 7
        assert!((covariance(&x, &y).unwrap() - 3.5).abs() < 1e-12);
        assert!(covariance(&x, &y[..2]).is_none());
    }

    #[test]
    fn test_constant_feature() {
        let x = vec![5.0, 5.0, 5.0];
        let y = vec![1.0, 2.0, 6.0];
        let fit = LinearFit::fit(&x, &y).unwrap();
        assert_eq!(fit.slope, 0.0);
        assert!((fit.intercept - 3.0).abs() < 1e-12);
        assert!(pearson(&x, &y).is_none());
        assert!(LinearFit::fit(&[1.0], &[2.0]).is_none());
    }

    #[test]
    fn test_correlation_matrix() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![3.0, 2.0, 1.0];
        let m = correlation_matrix(&[a, b]);
        assert!((m[0][0].unwrap() - 1.0).abs() < 1e-12);
        assert!((m[0][1].unwrap() + 1.0).abs() < 1e-12);
        assert_eq!(m[0][1], m[1][0]);
    }
}
