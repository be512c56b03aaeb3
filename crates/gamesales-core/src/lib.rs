//! gamesales-core - Dashboard views over the game sales dataset
//!
//! This crate turns a loaded table into serializable view results:
//!
//! - **Dashboard**: owns the snapshot and config, one method per view
//! - **Selectors**: typed menu options parsed from user-facing keys
//! - **Views**: frequency table, bar/line, pie, histogram, descriptive
//!   statistics, probability distributions, regression
//! - **Outlier**: IQR filtering over table rows
//! - **Config**: year range, binning presets, chart settings
//!
//! # Example
//!
//! ```no_run
//! use gamesales_core::{Dashboard, DashboardConfig, NumericColumn};
//!
//! let dashboard = Dashboard::open("games.csv", DashboardConfig::default())?;
//! let view = dashboard.frequency(NumericColumn::LaunchPrice)?;
//! for row in view.display_rows() {
//!     println!("{}", row.join("\t"));
//! }
//! # Ok::<(), gamesales_core::DashboardError>(())
//! ```

pub mod chart;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod outlier;
pub mod selector;
pub mod views;

pub use chart::{Chart, ChartKind, Point, Series, XValue};
pub use config::{
    DashboardConfig, DistributionConfig, FrequencyPresets, HistogramConfig, PieConfig,
};
pub use dashboard::{Dashboard, Request, ViewOutput};
pub use error::{ConfigError, DashboardError, DashboardResult};
pub use format::{format_millions, format_opt, format_thousands, Measure, UNDEFINED};
pub use outlier::filter_iqr;
pub use selector::{parse_column, BarMetric, PieSelection, Rank, RegressionFeature};
pub use views::*;

pub use gamesales_io::{NumericColumn, YearRange};
