//! Record types and column selectors for the game sales dataset

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::reader::IoError;

/// Header of the title column
pub const TITLE_COLUMN: &str = "Title";

/// Header of the release date column
pub const RELEASE_DATE_COLUMN: &str = "Release.Date";

/// Numeric columns of the dataset
///
/// Replaces lookup by string key: callers parse a key once at the boundary
/// and pass the variant around afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumericColumn {
    LaunchPrice,
    ReviewsTotal,
    RevenueEstimated,
}

impl NumericColumn {
    /// All numeric columns in dataset order
    pub const ALL: [NumericColumn; 3] = [
        NumericColumn::LaunchPrice,
        NumericColumn::ReviewsTotal,
        NumericColumn::RevenueEstimated,
    ];

    /// Header name in the source file
    pub fn key(&self) -> &'static str {
        match self {
            NumericColumn::LaunchPrice => "Launch.Price",
            NumericColumn::ReviewsTotal => "Reviews.Total",
            NumericColumn::RevenueEstimated => "Revenue.Estimated",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            NumericColumn::LaunchPrice => "Launch Price",
            NumericColumn::ReviewsTotal => "Reviews Total",
            NumericColumn::RevenueEstimated => "Revenue Estimated",
        }
    }
}

impl fmt::Display for NumericColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for NumericColumn {
    type Err = IoError;

    /// Accepts either the header key (`Launch.Price`) or the display name
    /// (`Launch Price`), ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NumericColumn::ALL
            .into_iter()
            .find(|c| c.key() == s || c.display_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| IoError::UnknownColumn(s.to_string()))
    }
}

/// Access to numeric fields by column
pub trait NumericRecord {
    /// Value of a numeric column, `None` when missing
    fn numeric(&self, column: NumericColumn) -> Option<f64>;
}

/// One row of the source file after coercion
///
/// Fields that were empty or failed to parse are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub title: String,
    pub launch_price: Option<f64>,
    pub reviews_total: Option<f64>,
    pub revenue_estimated: Option<f64>,
    pub release_date: Option<NaiveDate>,
}

impl RawRecord {
    /// Release year, if the date parsed
    pub fn release_year(&self) -> Option<i32> {
        self.release_date.map(|d| d.year())
    }

    /// Check that every listed column has a value
    pub fn has_all(&self, columns: &[NumericColumn]) -> bool {
        columns.iter().all(|&c| self.numeric(c).is_some())
    }
}

impl NumericRecord for RawRecord {
    fn numeric(&self, column: NumericColumn) -> Option<f64> {
        match column {
            NumericColumn::LaunchPrice => self.launch_price,
            NumericColumn::ReviewsTotal => self.reviews_total,
            NumericColumn::RevenueEstimated => self.revenue_estimated,
        }
    }
}

/// A fully valid game record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Game title
    pub title: String,
    /// Launch price in dollars
    pub launch_price: f64,
    /// Total number of reviews
    pub reviews_total: f64,
    /// Estimated revenue in dollars
    pub revenue_estimated: f64,
    /// Release date
    pub release_date: NaiveDate,
}

impl GameRecord {
    /// Promote a raw record when every field is present
    pub fn from_raw(raw: &RawRecord) -> Option<Self> {
        Some(Self {
            title: raw.title.clone(),
            launch_price: raw.launch_price?,
            reviews_total: raw.reviews_total?,
            revenue_estimated: raw.revenue_estimated?,
            release_date: raw.release_date?,
        })
    }

    pub fn release_year(&self) -> i32 {
        self.release_date.year()
    }

    /// Release month, 1 to 12
    pub fn release_month(&self) -> u32 {
        self.release_date.month()
    }

    /// Value of a numeric column
    pub fn value(&self, column: NumericColumn) -> f64 {
        match column {
            NumericColumn::LaunchPrice => self.launch_price,
            NumericColumn::ReviewsTotal => self.reviews_total,
            NumericColumn::RevenueEstimated => self.revenue_estimated,
        }
    }
}

impl NumericRecord for GameRecord {
    fn numeric(&self, column: NumericColumn) -> Option<f64> {
        Some(self.value(column))
    }
}

impl<T: NumericRecord> NumericRecord for &T {
    fn numeric(&self, column: NumericColumn) -> Option<f64> {
        (**self).numeric(column)
    }
}
