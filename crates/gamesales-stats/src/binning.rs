//! Fixed-width binning and frequency tables
//!
//! A frequency table splits `[0, upper_bound)` into buckets of equal width
//! and adds one open-ended bucket `[upper_bound, +inf)` for everything
//! above. Each row carries a count, a running total and a percentage.

use crate::error::{StatsError, StatsResult};
use serde::{Deserialize, Serialize};

/// Most finite buckets a layout may produce
pub const MAX_BUCKETS: usize = 10_000;

/// Layout of a frequency table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinSpec {
    /// Width of every finite bucket
    pub bin_width: f64,
    /// Start of the overflow bucket
    pub upper_bound: f64,
    /// Prefix for labels, e.g. `$`
    #[serde(default)]
    pub prefix: String,
}

impl BinSpec {
    /// Build a validated spec
    pub fn new(bin_width: f64, upper_bound: f64, prefix: impl Into<String>) -> StatsResult<Self> {
        let spec = Self {
            bin_width,
            upper_bound,
            prefix: prefix.into(),
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Reject layouts that would produce degenerate ranges
    pub fn validate(&self) -> StatsResult<()> {
        if !self.bin_width.is_finite() || !self.upper_bound.is_finite() {
            return Err(StatsError::InvalidBinSpec(
                "bin_width and upper_bound must be finite".to_string(),
            ));
        }
        if self.bin_width <= 0.0 {
            return Err(StatsError::InvalidBinSpec(format!(
                "bin_width must be positive, got {}",
                self.bin_width
            )));
        }
        if self.upper_bound <= self.bin_width {
            return Err(StatsError::InvalidBinSpec(format!(
                "upper_bound ({}) must exceed bin_width ({})",
                self.upper_bound, self.bin_width
            )));
        }
        if self.upper_bound / self.bin_width > MAX_BUCKETS as f64 {
            return Err(StatsError::InvalidBinSpec(format!(
                "{} / {} gives more than {} buckets",
                self.upper_bound, self.bin_width, MAX_BUCKETS
            )));
        }
        Ok(())
    }

    /// Bucket edges including the trailing `+inf`
    ///
    /// Edges are `i * bin_width` below `upper_bound`, then `upper_bound`
    /// itself, so the overflow bucket always starts exactly there.
    pub fn edges(&self) -> Vec<f64> {
        let mut edges: Vec<f64> = (0..)
            .map(|i| i as f64 * self.bin_width)
            .take_while(|&e| e < self.upper_bound)
            .collect();
        edges.push(self.upper_bound);
        edges.push(f64::INFINITY);
        edges
    }
}

/// Format a bucket bound for display
///
/// Millions get one decimal and an `M`, thousands are rounded to a whole
/// `K`. Smaller fractional values are rounded to two decimals so edges
/// like `3 * 0.1` print as `0.3`.
pub fn format_bound(value: f64, prefix: &str) -> String {
    if value >= 1_000_000.0 {
        format!("{}{:.1}M", prefix, value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{}{:.0}K", prefix, value / 1_000.0)
    } else if value.fract() == 0.0 {
        format!("{}{}", prefix, value as i64)
    } else {
        let rounded = format!("{:.2}", value);
        let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
        format!("{}{}", prefix, trimmed)
    }
}

/// A numeric interval used for counting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    /// Display label
    pub label: String,
    /// Inclusive lower edge
    pub lower: f64,
    /// Exclusive upper edge, `+inf` for the overflow bucket
    #[serde(with = "infinite_as_null")]
    pub upper: f64,
}

impl Bucket {
    /// Whether `value` lies in `[lower, upper)`
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value < self.upper
    }

    /// The open-ended bucket above `upper_bound`
    pub fn is_overflow(&self) -> bool {
        self.upper.is_infinite()
    }
}

/// One row of a frequency table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyRow {
    #[serde(flatten)]
    pub bucket: Bucket,
    /// Values in this bucket
    pub count: usize,
    /// Values in this and all earlier buckets
    pub cumulative: usize,
    /// Share of the total in percent, 0 when the table is empty
    pub relative_pct: f64,
}

/// Frequency table ordered by lower edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyTable {
    pub spec: BinSpec,
    pub rows: Vec<FrequencyRow>,
    /// Values that fell below zero or were not finite
    pub unbinned: usize,
}

impl FrequencyTable {
    /// Number of binned values
    pub fn total(&self) -> usize {
        self.rows.last().map(|r| r.cumulative).unwrap_or(0)
    }

    /// Per-bucket counts in row order
    pub fn counts(&self) -> Vec<usize> {
        self.rows.iter().map(|r| r.count).collect()
    }

    /// Bucket labels in row order, overflow last
    pub fn labels(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.bucket.label.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Build the frequency table for `values`
pub fn build_frequency_table(values: &[f64], spec: &BinSpec) -> StatsResult<FrequencyTable> {
    spec.validate()?;

    let edges = spec.edges();
    let num_buckets = edges.len() - 1;
    let mut counts = vec![0usize; num_buckets];
    let mut unbinned = 0;

    for &v in values {
        if !v.is_finite() || v < 0.0 {
            unbinned += 1;
            continue;
        }
        // Last edge <= v marks the bucket; the +inf edge is never <= v
        let idx = edges.partition_point(|&e| e <= v) - 1;
        counts[idx] += 1;
    }

    let total: usize = counts.iter().sum();
    let mut cumulative = 0;
    let rows = counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            cumulative += count;
            let (lower, upper) = (edges[i], edges[i + 1]);
            let label = if upper.is_infinite() {
                format!(">{}", format_bound(spec.upper_bound, &spec.prefix))
            } else {
                format!(
                    "{} - {}",
                    format_bound(lower, &spec.prefix),
                    format_bound(upper, &spec.prefix)
                )
            };
            let relative_pct = if total == 0 {
                0.0
            } else {
                count as f64 / total as f64 * 100.0
            };
            FrequencyRow {
                bucket: Bucket {
                    label,
                    lower,
                    upper,
                },
                count,
                cumulative,
                relative_pct,
            }
        })
        .collect();

    Ok(FrequencyTable {
        spec: spec.clone(),
        rows,
        unbinned,
    })
}

/// Count values into half-open bins given by ascending `edges`
///
/// Values outside `[edges[0], edges[last])` are ignored. The result has
/// `edges.len() - 1` entries.
pub fn count_in_edges(values: &[f64], edges: &[f64]) -> StatsResult<Vec<usize>> {
    if edges.len() < 2 {
        return Err(StatsError::InvalidEdges(
            "at least two edges are required".to_string(),
        ));
    }
    if edges.windows(2).any(|w| !(w[0] < w[1])) {
        return Err(StatsError::InvalidEdges(
            "edges must be strictly ascending".to_string(),
        ));
    }

    let first = edges[0];
    let last = edges[edges.len() - 1];
    let mut counts = vec![0usize; edges.len() - 1];
    for &v in values {
        if !(v >= first && v < last) {
            continue;
        }
        let idx = edges.partition_point(|&e| e <= v) - 1;
        counts[idx] += 1;
    }
    Ok(counts)
}

/// Evenly spaced edges `start, start + step, …` up to and including `end`
pub fn stepped_edges(start: f64, end: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || end < start {
        return Vec::new();
    }
    let n = ((end - start) / step + 1e-9).floor() as usize;
    (0..=n).map(|i| start + i as f64 * step).collect()
}

mod infinite_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_some(value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_frequency_table_example() {
        let spec = BinSpec::new(10.0, 40.0, "").unwrap();
        let table = build_frequency_table(&[5.0, 15.0, 25.0, 35.0, 95.0], &spec).unwrap();

        assert_eq!(table.counts(), vec![1, 1, 1, 1, 1]);
        let cumulative: Vec<usize> = table.rows.iter().map(|r| r.cumulative).collect();
        assert_eq!(cumulative, vec![1, 2, 3, 4, 5]);
        for row in &table.rows {
            assert!((row.relative_pct - 20.0).abs() < 1e-10);
        }
        assert_eq!(
            table.labels(),
            vec!["0 - 10", "10 - 20", "20 - 30", "30 - 40", ">40"]
        );
        assert!(table.rows[4].bucket.is_overflow());
    }

    #[test]
    fn test_edges_are_half_open() {
        let spec = BinSpec::new(10.0, 40.0, "").unwrap();
        let table = build_frequency_table(&[0.0, 10.0, 39.999, 40.0], &spec).unwrap();
        assert_eq!(table.counts(), vec![1, 1, 0, 1, 1]);
    }

    #[test]
    fn test_currency_labels() {
        let spec = BinSpec::new(1_500_000.0, 9_000_000.0, "$").unwrap();
        let table = build_frequency_table(&[], &spec).unwrap();
        assert_eq!(
            table.labels(),
            vec![
                "$0 - $1.5M",
                "$1.5M - $3.0M",
                "$3.0M - $4.5M",
                "$4.5M - $6.0M",
                "$6.0M - $7.5M",
                "$7.5M - $9.0M",
                ">$9.0M"
            ]
        );
    }

    #[test]
    fn test_thousands_labels() {
        let spec = BinSpec::new(50_000.0, 300_000.0, "").unwrap();
        let table = build_frequency_table(&[], &spec).unwrap();
        assert_eq!(table.labels()[1], "50K - 100K");
        assert_eq!(table.labels()[6], ">300K");
    }

    #[test]
    fn test_empty_input_has_zero_rows() {
        let spec = BinSpec::new(10.0, 60.0, "$").unwrap();
        let table = build_frequency_table(&[], &spec).unwrap();
        assert_eq!(table.rows.len(), 7);
        assert!(table.is_empty());
        assert!(table.rows.iter().all(|r| r.count == 0 && r.relative_pct == 0.0));
    }

    #[test]
    fn test_upper_bound_not_a_multiple() {
        let spec = BinSpec::new(15.0, 40.0, "").unwrap();
        assert_eq!(spec.edges(), vec![0.0, 15.0, 30.0, 40.0, f64::INFINITY]);
        let table = build_frequency_table(&[35.0, 41.0], &spec).unwrap();
        assert_eq!(table.counts(), vec![0, 0, 1, 1]);
    }

    #[test]
    fn test_negative_and_nan_unbinned() {
        let spec = BinSpec::new(10.0, 40.0, "").unwrap();
        let table = build_frequency_table(&[-1.0, f64::NAN, 3.0], &spec).unwrap();
        assert_eq!(table.unbinned, 2);
        assert_eq!(table.total(), 1);
    }

    #[rstest]
    #[case(0.0, 40.0)]
    #[case(-5.0, 40.0)]
    #[case(10.0, 10.0)]
    #[case(10.0, 5.0)]
    #[case(f64::NAN, 40.0)]
    #[case(1e-9, 1e9)]
    #[case(1.0, 10_001.0)]
    fn test_invalid_spec_rejected(#[case] width: f64, #[case] upper: f64) {
        assert!(matches!(
            BinSpec::new(width, upper, ""),
            Err(StatsError::InvalidBinSpec(_))
        ));
    }

    #[test]
    fn test_bucket_cap_is_inclusive() {
        let spec = BinSpec::new(1.0, MAX_BUCKETS as f64, "").unwrap();
        assert_eq!(spec.edges().len(), MAX_BUCKETS + 2);
    }

    #[test]
    fn test_fractional_labels_rounded() {
        let spec = BinSpec::new(0.1, 0.5, "").unwrap();
        let table = build_frequency_table(&[], &spec).unwrap();
        assert_eq!(
            table.labels(),
            vec!["0 - 0.1", "0.1 - 0.2", "0.2 - 0.3", "0.3 - 0.4", "0.4 - 0.5", ">0.5"]
        );
    }

    #[rstest]
    #[case(0.0, "$", "$0")]
    #[case(10.0, "$", "$10")]
    #[case(2.5, "", "2.5")]
    #[case(0.1 * 3.0, "", "0.3")]
    #[case(7.25, "$", "$7.25")]
    #[case(0.999, "", "1")]
    #[case(1_000.0, "", "1K")]
    #[case(50_000.0, "", "50K")]
    #[case(1_500_000.0, "$", "$1.5M")]
    #[case(9_000_000.0, "$", "$9.0M")]
    fn test_format_bound(#[case] value: f64, #[case] prefix: &str, #[case] expected: &str) {
        assert_eq!(format_bound(value, prefix), expected);
    }

    #[test]
    fn test_count_in_edges() {
        let edges = stepped_edges(0.0, 80.0, 10.0);
        assert_eq!(edges.len(), 9);
        let counts = count_in_edges(&[0.0, 9.99, 10.0, 79.0, 80.0, -1.0], &edges).unwrap();
        assert_eq!(counts, vec![2, 1, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_count_in_edges_rejects_bad_edges() {
        assert!(count_in_edges(&[1.0], &[0.0]).is_err());
        assert!(count_in_edges(&[1.0], &[0.0, 2.0, 1.0]).is_err());
    }
}
