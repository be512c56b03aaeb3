//! Bar (and line) charts for the home page

use gamesales_io::{GameRecord, GameTable, NumericColumn, YearRange};
use gamesales_stats::{count_in_edges, stepped_edges};

use crate::chart::{Chart, ChartKind, Point, Series};
use crate::error::DashboardResult;
use crate::selector::BarMetric;

/// Short month names, January first
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const GAMES_AXIS: &str = "Total Number of Games";

/// Fixed bins of a range metric
struct RangeBins {
    end: f64,
    step: f64,
    /// Formats one edge of a bar label
    bound: fn(f64) -> String,
}

/// Whole millions, truncated: 1.5M reads `$1M`
fn truncated_millions(v: f64) -> String {
    format!("${}M", (v / 1_000_000.0).trunc() as i64)
}

/// Whole thousands with a lowercase `k`
fn truncated_thousands(v: f64) -> String {
    format!("{}k", (v / 1_000.0).trunc() as i64)
}

fn whole_dollars(v: f64) -> String {
    format!("${}", v.trunc() as i64)
}

const REVENUE_BINS: RangeBins = RangeBins {
    end: 15_000_000.0,
    step: 1_500_000.0,
    bound: truncated_millions,
};

const REVIEW_BINS: RangeBins = RangeBins {
    end: 500_000.0,
    step: 50_000.0,
    bound: truncated_thousands,
};

const PRICE_BINS: RangeBins = RangeBins {
    end: 80.0,
    step: 10.0,
    bound: whole_dollars,
};

/// Build the chart for `metric`
///
/// `as_line` only applies to time-based metrics.
pub fn bar_chart(
    table: &GameTable,
    metric: BarMetric,
    as_line: bool,
    years: YearRange,
) -> DashboardResult<Chart> {
    let kind = if as_line && metric.is_time_series() {
        ChartKind::Line
    } else {
        ChartKind::Bar
    };

    let chart = match metric {
        BarMetric::RevenueEstimated => range_chart(
            table,
            NumericColumn::RevenueEstimated,
            &REVENUE_BINS,
            "Number of Games vs Revenue Estimated",
            "Revenue Range ($)",
        )?,
        BarMetric::ReviewsTotal => range_chart(
            table,
            NumericColumn::ReviewsTotal,
            &REVIEW_BINS,
            "Number of Games vs Reviews Total",
            "Reviews Range",
        )?,
        BarMetric::LaunchPrice => range_chart(
            table,
            NumericColumn::LaunchPrice,
            &PRICE_BINS,
            "Number of Games vs Launch Price",
            "Launch Price Range ($)",
        )?,
        BarMetric::GamesPerYear => {
            let points = per_year(table, years, |_| 1.0);
            Chart::new(kind, metric.label(), "Year", "Total Games Released")
                .with_series(Series::new("games", kind, points))
        }
        BarMetric::RevenuePerYear => {
            let points = per_year(table, years, |g| g.revenue_estimated);
            Chart::new(kind, metric.label(), "Year", "Total Revenue")
                .with_series(Series::new("revenue", kind, points))
        }
        BarMetric::GamesPerMonth => {
            let points = per_month(table, |_| 1.0);
            Chart::new(kind, metric.label(), "Month", "Total Games Released")
                .with_series(Series::new("games", kind, points))
        }
        BarMetric::RevenuePerMonth => {
            let points = per_month(table, |g| g.revenue_estimated);
            Chart::new(kind, metric.label(), "Month", "Total Revenue ($)")
                .with_series(Series::new("revenue", kind, points))
        }
    };
    Ok(chart)
}

/// Count games per fixed range starting at zero; values past the last
/// edge are left out
fn range_chart(
    table: &GameTable,
    column: NumericColumn,
    bins: &RangeBins,
    title: &str,
    x_label: &str,
) -> DashboardResult<Chart> {
    let edges = stepped_edges(0.0, bins.end, bins.step);
    let counts = count_in_edges(&table.column_values(column), &edges)?;
    let points = edges
        .windows(2)
        .zip(counts)
        .map(|(w, c)| {
            let label = format!("{} - {}", (bins.bound)(w[0]), (bins.bound)(w[1]));
            Point::new(label, c as f64)
        })
        .collect();

    Ok(Chart::new(ChartKind::Bar, title, x_label, GAMES_AXIS)
        .with_series(Series::new("games", ChartKind::Bar, points)))
}

/// Sum `value` per release year; years without games are 0
fn per_year<F>(table: &GameTable, years: YearRange, value: F) -> Vec<Point>
where
    F: Fn(&GameRecord) -> f64,
{
    let mut totals = vec![0.0; years.years().count()];
    for game in table.records() {
        let year = game.release_year();
        if years.contains(year) {
            totals[(year - years.first) as usize] += value(game);
        }
    }
    years.years().zip(totals).map(|(y, t)| Point::new(y, t)).collect()
}

/// Sum `value` per release month; months without games are 0
fn per_month<F>(table: &GameTable, value: F) -> Vec<Point>
where
    F: Fn(&GameRecord) -> f64,
{
    let mut totals = [0.0; 12];
    for game in table.records() {
        totals[(game.release_month() - 1) as usize] += value(game);
    }
    MONTHS
        .iter()
        .zip(totals)
        .map(|(m, t)| Point::new(*m, t))
        .collect()
}
