//! Dashboard façade
//!
//! Owns the loaded snapshot and the configuration. Every view is
//! recomputed from the snapshot on each call; nothing is cached.

use gamesales_io::{open_file, GameTable, NumericColumn, RawTable};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chart::Chart;
use crate::config::DashboardConfig;
use crate::error::{DashboardError, DashboardResult};
use crate::selector::{parse_column, BarMetric, PieSelection, RegressionFeature};
use crate::views::{
    bar_chart, descriptive_view, distributions_report, frequency_view, histogram_view,
    pie_chart, regression_view, DescriptiveView, DistributionsReport, FrequencyView,
    HistogramView, RegressionView,
};

/// A single view request, as a menu selection would produce it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum Request {
    Frequency { column: NumericColumn },
    Bar { metric: BarMetric, as_line: bool },
    Pie { selection: PieSelection },
    Histogram { column: NumericColumn },
    Descriptive { column: NumericColumn, show_outliers: bool },
    Distributions,
    Regression { feature: RegressionFeature },
}

impl Request {
    /// Every menu option with its default toggles
    pub fn all() -> Vec<Request> {
        let mut requests = Vec::new();
        for column in NumericColumn::ALL {
            requests.push(Request::Frequency { column });
        }
        for metric in BarMetric::ALL {
            requests.push(Request::Bar {
                metric,
                as_line: false,
            });
        }
        for selection in PieSelection::ALL {
            requests.push(Request::Pie { selection });
        }
        for column in NumericColumn::ALL {
            requests.push(Request::Histogram { column });
        }
        for column in NumericColumn::ALL {
            requests.push(Request::Descriptive {
                column,
                show_outliers: false,
            });
        }
        requests.push(Request::Distributions);
        for feature in RegressionFeature::ALL {
            requests.push(Request::Regression { feature });
        }
        requests
    }
}

/// Result of rendering a `Request`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "view", content = "data", rename_all = "snake_case")]
pub enum ViewOutput {
    Frequency(FrequencyView),
    Chart(Chart),
    Histogram(HistogramView),
    Descriptive(DescriptiveView),
    Distributions(DistributionsReport),
    Regression(RegressionView),
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    raw: RawTable,
    config: DashboardConfig,
}

impl Dashboard {
    /// Wrap an already loaded table
    pub fn new(raw: RawTable, config: DashboardConfig) -> DashboardResult<Self> {
        config.validate()?;
        Ok(Self { raw, config })
    }

    /// Load the dataset at `path`
    pub fn open(path: &str, config: DashboardConfig) -> DashboardResult<Self> {
        let raw = open_file(path)?;
        debug!(path, rows = raw.len(), "loaded dataset");
        Self::new(raw, config)
    }

    pub fn raw(&self) -> &RawTable {
        &self.raw
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Fully valid rows within the configured year range
    pub fn cleaned(&self) -> GameTable {
        self.raw.clean(self.config.years)
    }

    pub fn frequency(&self, column: NumericColumn) -> DashboardResult<FrequencyView> {
        debug!(%column, "frequency table");
        frequency_view(&self.cleaned(), column, self.config.frequency.get(column))
    }

    pub fn bar(&self, metric: BarMetric, as_line: bool) -> DashboardResult<Chart> {
        debug!(%metric, as_line, "bar chart");
        bar_chart(&self.cleaned(), metric, as_line, self.config.years)
    }

    /// Pie chart of the configured top-N
    pub fn pie(&self, selection: PieSelection) -> Chart {
        debug!(selection = ?selection, n = self.config.pie.top_n, "pie chart");
        pie_chart(&self.cleaned(), selection, self.config.pie.top_n)
    }

    pub fn histogram(&self, column: NumericColumn) -> DashboardResult<HistogramView> {
        debug!(%column, "histogram");
        histogram_view(&self.cleaned(), column, &self.config.histogram)
    }

    pub fn descriptive(
        &self,
        column: NumericColumn,
        show_outliers: bool,
    ) -> DashboardResult<DescriptiveView> {
        debug!(%column, show_outliers, "descriptive statistics");
        descriptive_view(&self.raw, column, show_outliers)
    }

    pub fn distributions(&self) -> DashboardResult<DistributionsReport> {
        debug!("probability distributions");
        distributions_report(&self.raw, &self.config.distributions)
    }

    pub fn regression(&self, feature: RegressionFeature) -> RegressionView {
        debug!(%feature, "regression");
        regression_view(&self.raw, feature)
    }

    pub fn render(&self, request: Request) -> DashboardResult<ViewOutput> {
        let output = match request {
            Request::Frequency { column } => ViewOutput::Frequency(self.frequency(column)?),
            Request::Bar { metric, as_line } => ViewOutput::Chart(self.bar(metric, as_line)?),
            Request::Pie { selection } => ViewOutput::Chart(self.pie(selection)),
            Request::Histogram { column } => ViewOutput::Histogram(self.histogram(column)?),
            Request::Descriptive {
                column,
                show_outliers,
            } => ViewOutput::Descriptive(self.descriptive(column, show_outliers)?),
            Request::Distributions => ViewOutput::Distributions(self.distributions()?),
            Request::Regression { feature } => ViewOutput::Regression(self.regression(feature)),
        };
        Ok(output)
    }

    /// Look up a view by menu keys
    ///
    /// `key` is the column, metric or feature label; pie selections use
    /// their "Top 10 - Revenue Estimated" style label.
    pub fn render_key(&self, view: &str, key: &str) -> DashboardResult<ViewOutput> {
        let request = match view {
            "frequency" => Request::Frequency {
                column: parse_column("frequency table", key)?,
            },
            "bar" => Request::Bar {
                metric: key.parse()?,
                as_line: false,
            },
            "pie" => Request::Pie {
                selection: key.parse()?,
            },
            "histogram" => Request::Histogram {
                column: parse_column("histogram", key)?,
            },
            "descriptive" => Request::Descriptive {
                column: parse_column("descriptive statistics", key)?,
                show_outliers: false,
            },
            "distributions" => Request::Distributions,
            "regression" => Request::Regression {
                feature: key.parse()?,
            },
            other => {
                return Err(DashboardError::UnknownSelection {
                    menu: "view",
                    key: other.to_string(),
                })
            }
        };
        self.render(request)
    }
}
