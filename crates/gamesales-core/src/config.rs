//! Configuration for gamesales-core
//!
//! Centralized settings for the dashboard: accepted release years, the
//! frequency-table presets, chart sizes and probability thresholds.

use gamesales_io::{NumericColumn, YearRange};
use gamesales_stats::{BinSpec, MAX_BUCKETS};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Dashboard-wide configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Release years kept by the cleaned table
    pub years: YearRange,
    /// Frequency-table layouts per column
    pub frequency: FrequencyPresets,
    /// Pie chart settings
    pub pie: PieConfig,
    /// Histogram settings
    pub histogram: HistogramConfig,
    /// Probability distribution page settings
    pub distributions: DistributionConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            years: YearRange::default(),
            frequency: FrequencyPresets::default(),
            pie: PieConfig::default(),
            histogram: HistogramConfig::default(),
            distributions: DistributionConfig::default(),
        }
    }
}

/// Frequency-table layout for each numeric column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrequencyPresets {
    pub launch_price: BinSpec,
    pub reviews_total: BinSpec,
    pub revenue_estimated: BinSpec,
}

impl FrequencyPresets {
    pub fn get(&self, column: NumericColumn) -> &BinSpec {
        match column {
            NumericColumn::LaunchPrice => &self.launch_price,
            NumericColumn::ReviewsTotal => &self.reviews_total,
            NumericColumn::RevenueEstimated => &self.revenue_estimated,
        }
    }
}

impl Default for FrequencyPresets {
    fn default() -> Self {
        Self {
            launch_price: BinSpec {
                bin_width: 10.0,
                upper_bound: 60.0,
                prefix: "$".to_string(),
            },
            reviews_total: BinSpec {
                bin_width: 50_000.0,
                upper_bound: 300_000.0,
                prefix: String::new(),
            },
            revenue_estimated: BinSpec {
                bin_width: 1_500_000.0,
                upper_bound: 9_000_000.0,
                prefix: "$".to_string(),
            },
        }
    }
}

/// Pie chart configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieConfig {
    /// Number of titles in a top/bottom slice
    pub top_n: usize,
}

impl Default for PieConfig {
    fn default() -> Self {
        Self { top_n: 10 }
    }
}

/// Histogram configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistogramConfig {
    /// Launch price bins start here
    pub price_start: f64,
    /// Launch price bins end here
    pub price_end: f64,
    /// Launch price bin width
    pub price_width: f64,
    /// Bins for the log-scale revenue and review histograms
    pub log_bins: usize,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            price_start: 0.0,
            price_end: 80.0,
            price_width: 5.0,
            log_bins: 50,
        }
    }
}

/// Probability distribution page configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributionConfig {
    /// Density histogram bins
    pub bins: usize,
    /// Points on the fitted normal curve
    pub curve_points: usize,
    /// Revenue split point for the below/above estimates
    pub revenue_split: f64,
    /// Lower edge of the revenue band estimate
    pub revenue_band_low: f64,
    /// Upper edge of the revenue band estimate
    pub revenue_band_high: f64,
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self {
            bins: 50,
            curve_points: 100,
            revenue_split: 1_000_000.0,
            revenue_band_low: 2_500_000.0,
            revenue_band_high: 7_500_000.0,
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a TOML string
    #[cfg(feature = "toml-config")]
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to TOML
    #[cfg(feature = "toml-config")]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.years.is_valid() {
            return Err(ConfigError::OutOfRange(format!(
                "year range {}..={} is inverted",
                self.years.first, self.years.last
            )));
        }

        for column in NumericColumn::ALL {
            self.frequency
                .get(column)
                .validate()
                .map_err(|e| ConfigError::InvalidBins {
                    column: column.display_name().to_string(),
                    message: e.to_string(),
                })?;
        }

        if self.pie.top_n == 0 {
            return Err(ConfigError::OutOfRange("pie.top_n must be positive".to_string()));
        }

        let h = &self.histogram;
        if !(h.price_width > 0.0) || !(h.price_end > h.price_start) {
            return Err(ConfigError::OutOfRange(
                "histogram price bins need a positive width and end > start".to_string(),
            ));
        }
        if (h.price_end - h.price_start) / h.price_width > MAX_BUCKETS as f64 {
            return Err(ConfigError::OutOfRange(format!(
                "histogram price bins exceed {} buckets",
                MAX_BUCKETS
            )));
        }
        if h.log_bins == 0 || h.log_bins > MAX_BUCKETS {
            return Err(ConfigError::OutOfRange(format!(
                "histogram.log_bins must be in 1..={}",
                MAX_BUCKETS
            )));
        }

        let d = &self.distributions;
        if d.bins == 0 || d.bins > MAX_BUCKETS || d.curve_points < 2 {
            return Err(ConfigError::OutOfRange(format!(
                "distributions need 1..={} bins and two curve points",
                MAX_BUCKETS
            )));
        }
        if !(d.revenue_band_low < d.revenue_band_high) || d.revenue_split < 0.0 {
            return Err(ConfigError::OutOfRange(
                "revenue thresholds must be non-negative and the band ordered".to_string(),
            ));
        }

        Ok(())
    }
}
