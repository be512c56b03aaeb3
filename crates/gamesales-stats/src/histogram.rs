//! Histograms with explicit or equal-width bins

use crate::binning::{count_in_edges, stepped_edges};
use crate::error::{StatsError, StatsResult};
use serde::{Deserialize, Serialize};

/// Counts over ascending bin edges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// `counts.len() + 1` edges
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bins of `width` from `start` to `end`, values outside are ignored
    pub fn fixed(values: &[f64], start: f64, end: f64, width: f64) -> StatsResult<Self> {
        let edges = stepped_edges(start, end, width);
        let counts = count_in_edges(values, &edges)?;
        Ok(Self { edges, counts })
    }

    /// `bins` equal-width bins spanning the finite values
    ///
    /// The last bin is closed so the maximum is counted. When all values
    /// are equal a single unit-wide bin around them is used.
    pub fn equal_width(values: &[f64], bins: usize) -> StatsResult<Self> {
        if bins == 0 {
            return Err(StatsError::InvalidBinCount(bins));
        }

        let finite: Vec<f64> = values.iter().copied().filter(|x| x.is_finite()).collect();
        if finite.is_empty() {
            return Ok(Self {
                edges: Vec::new(),
                counts: Vec::new(),
            });
        }

        let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if min == max {
            return Ok(Self {
                edges: vec![min - 0.5, max + 0.5],
                counts: vec![finite.len()],
            });
        }

        let width = (max - min) / bins as f64;
        let mut edges: Vec<f64> = (0..bins).map(|i| min + i as f64 * width).collect();
        edges.push(max);

        let mut counts = vec![0usize; bins];
        for v in finite {
            let idx = (((v - min) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }
        Ok(Self { edges, counts })
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Counts normalized so the area of the histogram is 1
    pub fn densities(&self) -> Vec<f64> {
        let total = self.total() as f64;
        self.counts
            .iter()
            .zip(self.edges.windows(2))
            .map(|(&c, w)| {
                let width = w[1] - w[0];
                if total == 0.0 || width <= 0.0 {
                    0.0
                } else {
                    c as f64 / (total * width)
                }
            })
            .collect()
    }
}
