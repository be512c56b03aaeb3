//! Menu selectors
//!
//! Every dropdown of the dashboard maps to one of these types. Keys coming
//! from a user interface are parsed here; nothing downstream looks columns
//! up by string.

use gamesales_io::NumericColumn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DashboardError;

fn unknown(menu: &'static str, key: &str) -> DashboardError {
    DashboardError::UnknownSelection {
        menu,
        key: key.to_string(),
    }
}

/// Parse a numeric column for a given menu
pub fn parse_column(menu: &'static str, key: &str) -> Result<NumericColumn, DashboardError> {
    key.parse::<NumericColumn>().map_err(|_| unknown(menu, key))
}

/// Metrics offered by the bar chart menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BarMetric {
    RevenueEstimated,
    ReviewsTotal,
    GamesPerYear,
    RevenuePerYear,
    GamesPerMonth,
    RevenuePerMonth,
    LaunchPrice,
}

impl BarMetric {
    /// Menu order
    pub const ALL: [BarMetric; 7] = [
        BarMetric::RevenueEstimated,
        BarMetric::ReviewsTotal,
        BarMetric::GamesPerYear,
        BarMetric::RevenuePerYear,
        BarMetric::GamesPerMonth,
        BarMetric::RevenuePerMonth,
        BarMetric::LaunchPrice,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BarMetric::RevenueEstimated => "Revenue Estimated",
            BarMetric::ReviewsTotal => "Reviews Total",
            BarMetric::GamesPerYear => "Total Games Released Per Year",
            BarMetric::RevenuePerYear => "Total Revenue Per Year",
            BarMetric::GamesPerMonth => "Total Games Released Per Month",
            BarMetric::RevenuePerMonth => "Total Revenue Per Month",
            BarMetric::LaunchPrice => "Launch Price",
        }
    }

    /// Time-based metrics can be drawn as a line instead of bars
    pub fn is_time_series(&self) -> bool {
        matches!(
            self,
            BarMetric::GamesPerYear
                | BarMetric::RevenuePerYear
                | BarMetric::GamesPerMonth
                | BarMetric::RevenuePerMonth
        )
    }
}

impl fmt::Display for BarMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BarMetric {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        BarMetric::ALL
            .into_iter()
            .find(|m| m.label().eq_ignore_ascii_case(key))
            .ok_or_else(|| unknown("bar chart", s))
    }
}

/// Which end of the ranking a pie chart shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Top,
    Bottom,
}

/// Pie chart menu entry, e.g. "Top 10 - Revenue Estimated"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieSelection {
    pub rank: Rank,
    pub column: NumericColumn,
}

impl PieSelection {
    /// Menu order
    pub const ALL: [PieSelection; 4] = [
        PieSelection::new(Rank::Top, NumericColumn::RevenueEstimated),
        PieSelection::new(Rank::Bottom, NumericColumn::RevenueEstimated),
        PieSelection::new(Rank::Top, NumericColumn::ReviewsTotal),
        PieSelection::new(Rank::Bottom, NumericColumn::ReviewsTotal),
    ];

    pub const fn new(rank: Rank, column: NumericColumn) -> Self {
        Self { rank, column }
    }

    /// Menu label for a slice of `n` titles
    pub fn label(&self, n: usize) -> String {
        let rank = match self.rank {
            Rank::Top => "Top",
            Rank::Bottom => "Bottom",
        };
        format!("{} {} - {}", rank, n, self.column.display_name())
    }
}

impl FromStr for PieSelection {
    type Err = DashboardError;

    /// The count in the label is informational; the configured size wins.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (head, column) = s.split_once(" - ").ok_or_else(|| unknown("pie chart", s))?;
        let rank = match head.split_whitespace().next() {
            Some(w) if w.eq_ignore_ascii_case("top") => Rank::Top,
            Some(w) if w.eq_ignore_ascii_case("bottom") => Rank::Bottom,
            _ => return Err(unknown("pie chart", s)),
        };
        let column = parse_column("pie chart", column)?;
        if column == NumericColumn::LaunchPrice {
            return Err(unknown("pie chart", s));
        }
        Ok(Self { rank, column })
    }
}

/// Features offered by the regression page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegressionFeature {
    ReviewsTotal,
    LaunchPrice,
}

impl RegressionFeature {
    pub const ALL: [RegressionFeature; 2] =
        [RegressionFeature::ReviewsTotal, RegressionFeature::LaunchPrice];

    pub fn column(&self) -> NumericColumn {
        match self {
            RegressionFeature::ReviewsTotal => NumericColumn::ReviewsTotal,
            RegressionFeature::LaunchPrice => NumericColumn::LaunchPrice,
        }
    }

    /// Plain-language reading of the slope
    pub fn slope_phrase(&self) -> &'static str {
        match self {
            RegressionFeature::ReviewsTotal => "each additional review is associated with",
            RegressionFeature::LaunchPrice => "each unit increase in price is associated with",
        }
    }
}

impl fmt::Display for RegressionFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column().display_name())
    }
}

impl FromStr for RegressionFeature {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_column("regression feature", s)? {
            NumericColumn::ReviewsTotal => Ok(RegressionFeature::ReviewsTotal),
            NumericColumn::LaunchPrice => Ok(RegressionFeature::LaunchPrice),
            NumericColumn::RevenueEstimated => Err(unknown("regression feature", s)),
        }
    }
}
