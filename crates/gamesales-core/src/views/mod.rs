//! One module per dashboard view
//!
//! Home page views (frequency, bar, pie, histogram) work on the cleaned
//! table. The descriptive, distributions and regression pages start from
//! the raw table and select the rows they need.

mod bar;
mod descriptive;
mod distributions;
mod frequency;
mod histogram;
mod pie;
mod regression;

pub use bar::{bar_chart, MONTHS};
pub use descriptive::{descriptive_view, DescriptiveView};
pub use distributions::{
    distributions_report, DistributionView, DistributionsReport, ProbabilityEstimate,
};
pub use frequency::{frequency_view, FrequencyView, FREQUENCY_HEADERS};
pub use histogram::{histogram_view, HistogramView};
pub use pie::pie_chart;
pub use regression::{regression_view, CorrelationMatrix, RegressionView, FILTER_ORDER};
