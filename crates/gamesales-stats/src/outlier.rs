//! Interquartile-range fences and sequential outlier filtering

use crate::quantile::{quantile_sorted, sorted_finite};
use serde::{Deserialize, Serialize};

/// Multiplier applied to the IQR to place the fences
pub const FENCE_FACTOR: f64 = 1.5;

/// Tukey fences for one column
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IqrFence {
    /// 25th percentile
    pub q1: f64,
    /// 75th percentile
    pub q3: f64,
    /// `q3 - q1`
    pub iqr: f64,
    /// `q1 - 1.5 * iqr`
    pub lower: f64,
    /// `q3 + 1.5 * iqr`
    pub upper: f64,
}

impl IqrFence {
    /// Fences from the finite values, `None` if there are none
    pub fn from_values(values: &[f64]) -> Option<Self> {
        Self::from_sorted(&sorted_finite(values))
    }

    /// Fences from sorted finite values
    pub fn from_sorted(sorted: &[f64]) -> Option<Self> {
        let q1 = quantile_sorted(sorted, 0.25)?;
        let q3 = quantile_sorted(sorted, 0.75)?;
        Some(Self::from_quartiles(q1, q3))
    }

    pub fn from_quartiles(q1: f64, q3: f64) -> Self {
        let iqr = q3 - q1;
        Self {
            q1,
            q3,
            iqr,
            lower: q1 - FENCE_FACTOR * iqr,
            upper: q3 + FENCE_FACTOR * iqr,
        }
    }

    /// Inclusive on both ends
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// Remove rows outside the IQR fences of each column in turn
///
/// Fences for column k are computed only from rows that survived columns
/// 1..k-1, so the order of `extractors` matters. A row whose value is
/// missing or not finite is removed at that column.
pub fn filter_iqr_by<T, F>(rows: Vec<T>, extractors: &[F]) -> Vec<T>
where
    F: Fn(&T) -> Option<f64>,
{
    extractors.iter().fold(rows, |rows, extract| {
        let values: Vec<f64> = rows.iter().filter_map(extract).collect();
        match IqrFence::from_values(&values) {
            Some(fence) => rows
                .into_iter()
                .filter(|row| {
                    extract(row)
                        .map(|v| v.is_finite() && fence.contains(v))
                        .unwrap_or(false)
                })
                .collect(),
            None => Vec::new(),
        }
    })
}

/// Keep the values inside their own IQR fences
pub fn filter_iqr_values(values: &[f64]) -> Vec<f64> {
    filter_iqr_by(values.to_vec(), &[|v: &f64| Some(*v)])
}
