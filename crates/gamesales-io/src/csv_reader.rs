//! CSV reader for the game sales file
//!
//! The header row is required. Column names are trimmed before lookup, and
//! any extra columns are ignored.

use crate::coerce::{parse_numeric, parse_release_date};
use crate::reader::{IoError, IoResult};
use crate::record::{NumericColumn, RawRecord, RELEASE_DATE_COLUMN, TITLE_COLUMN};
use crate::table::RawTable;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, warn};

/// Positions of the required columns in the header
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    title: usize,
    launch_price: usize,
    reviews_total: usize,
    revenue_estimated: usize,
    release_date: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> IoResult<Self> {
        let names: Vec<&str> = headers.iter().map(str::trim).collect();
        let find = |name: &str| {
            names
                .iter()
                .position(|h| *h == name)
                .ok_or_else(|| IoError::ColumnNotFound(name.to_string()))
        };

        Ok(Self {
            title: find(TITLE_COLUMN)?,
            launch_price: find(NumericColumn::LaunchPrice.key())?,
            reviews_total: find(NumericColumn::ReviewsTotal.key())?,
            revenue_estimated: find(NumericColumn::RevenueEstimated.key())?,
            release_date: find(RELEASE_DATE_COLUMN)?,
        })
    }

    fn parse(&self, record: &csv::StringRecord) -> RawRecord {
        let field = |i: usize| record.get(i).unwrap_or("");
        RawRecord {
            title: field(self.title).trim().to_string(),
            launch_price: parse_numeric(field(self.launch_price)),
            reviews_total: parse_numeric(field(self.reviews_total)),
            revenue_estimated: parse_numeric(field(self.revenue_estimated)),
            release_date: parse_release_date(field(self.release_date)),
        }
    }
}

/// CSV file reader
pub struct CsvReader {
    path: Option<String>,
    table: RawTable,
    skipped_rows: usize,
}

impl CsvReader {
    /// Open a comma-separated file
    pub fn open(path: &str) -> IoResult<Self> {
        Self::open_with_options(path, b',')
    }

    /// Open a delimited file with a custom delimiter
    pub fn open_with_options(path: &str, delimiter: u8) -> IoResult<Self> {
        if !Path::new(path).exists() {
            return Err(IoError::FileNotFound(path.to_string()));
        }

        let file = File::open(path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
        let mut reader = Self::from_reader(BufReader::new(file), delimiter)?;
        reader.path = Some(path.to_string());
        Ok(reader)
    }

    /// Read from any byte source
    pub fn from_reader<R: Read>(source: R, delimiter: u8) -> IoResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(source);

        let headers = reader
            .headers()
            .map_err(|e| IoError::InvalidFormat(e.to_string()))?
            .clone();
        let index = ColumnIndex::from_headers(&headers)?;

        let mut records = Vec::new();
        let mut skipped_rows = 0;

        for (line, result) in reader.records().enumerate() {
            match result {
                Ok(record) => records.push(index.parse(&record)),
                Err(e) => {
                    // Header is line 1
                    warn!(line = line + 2, error = %e, "skipping unreadable row");
                    skipped_rows += 1;
                }
            }
        }

        debug!(rows = records.len(), skipped = skipped_rows, "loaded csv");

        Ok(Self {
            path: None,
            table: RawTable::new(records),
            skipped_rows,
        })
    }

    /// The loaded table
    pub fn table(&self) -> &RawTable {
        &self.table
    }

    /// Consume the reader, keeping the table
    pub fn into_table(self) -> RawTable {
        self.table
    }

    /// Number of rows that could not be read at all
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }
}
