//! Immutable in-memory tables
//!
//! A `RawTable` is what the reader produced. A `GameTable` holds only rows
//! with every field present and a release year inside the configured range.

use crate::record::{GameRecord, NumericColumn, NumericRecord, RawRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Inclusive range of accepted release years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub first: i32,
    pub last: i32,
}

impl YearRange {
    pub fn new(first: i32, last: i32) -> Self {
        Self { first, last }
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.first..=self.last).contains(&year)
    }

    /// Every year in the range, ascending
    pub fn years(&self) -> impl Iterator<Item = i32> {
        self.first..=self.last
    }

    pub fn is_valid(&self) -> bool {
        self.first <= self.last
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self::new(1990, 2025)
    }
}

/// Rows as read from the source file
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    records: Vec<RawRecord>,
}

impl RawTable {
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[RawRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Non-missing values of one column, in row order
    pub fn column_values(&self, column: NumericColumn) -> Vec<f64> {
        self.records.iter().filter_map(|r| r.numeric(column)).collect()
    }

    /// Rows where all listed columns are present
    pub fn complete(&self, columns: &[NumericColumn]) -> Vec<&RawRecord> {
        self.records.iter().filter(|r| r.has_all(columns)).collect()
    }

    /// Keep fully valid rows released within `years`
    pub fn clean(&self, years: YearRange) -> GameTable {
        let records: Vec<GameRecord> = self
            .records
            .iter()
            .filter_map(GameRecord::from_raw)
            .filter(|g| years.contains(g.release_year()))
            .collect();

        debug!(
            kept = records.len(),
            dropped = self.records.len() - records.len(),
            first_year = years.first,
            last_year = years.last,
            "cleaned table"
        );

        GameTable { records }
    }
}

/// Rows with every field valid
#[derive(Debug, Clone, Default)]
pub struct GameTable {
    records: Vec<GameRecord>,
}

impl GameTable {
    pub fn new(records: Vec<GameRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Values of one column, in row order
    pub fn column_values(&self, column: NumericColumn) -> Vec<f64> {
        self.records.iter().map(|r| r.value(column)).collect()
    }
}
