//! gamesales-stats - Statistical functions for the game sales dashboard
//!
//! This crate provides the numeric core behind every view:
//!
//! - **Binning**: fixed-width buckets with an overflow bucket, frequency tables
//! - **Quantiles**: linear interpolation between order statistics
//! - **Outliers**: IQR fences, sequential multi-column filtering
//! - **Summary**: mean, median, sample variance, 95% CI, 3-sigma band
//! - **Histogram**, **Normal fit**, **Regression** for chart series
//!
//! All functions are pure and take their input by reference.

pub mod binning;
pub mod error;
pub mod histogram;
pub mod normal;
pub mod outlier;
pub mod quantile;
pub mod regression;
pub mod summary;

pub use binning::*;
pub use error::*;
pub use histogram::*;
pub use normal::*;
pub use outlier::*;
pub use quantile::*;
pub use regression::*;
pub use summary::*;
