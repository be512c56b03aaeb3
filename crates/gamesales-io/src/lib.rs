//! gamesales-io - Data I/O for the game sales dataset
//!
//! This crate turns a delimited text file into typed, immutable tables:
//!
//! - **Reader**: CSV/TSV loading with trimmed header lookup
//! - **Coercion**: numeric and release-date parsing, bad values become missing
//! - **Tables**: raw rows, and cleaned rows restricted to a year range
//!
//! # Design
//!
//! Tables are loaded once and passed by reference. Nothing in this crate
//! holds global state.

pub mod coerce;
pub mod reader;
pub mod record;
pub mod table;

#[cfg(feature = "csv")]
pub mod csv_reader;

pub use coerce::*;
pub use reader::*;
pub use record::*;
pub use table::*;

#[cfg(feature = "csv")]
pub use csv_reader::CsvReader;
