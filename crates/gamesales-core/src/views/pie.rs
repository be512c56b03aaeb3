//! Top/bottom-N pie charts

use gamesales_io::{GameRecord, GameTable, NumericColumn};

use crate::chart::{Chart, ChartKind, Point, Series};
use crate::selector::{PieSelection, Rank};

fn title(selection: PieSelection, n: usize) -> String {
    let rank = match selection.rank {
        Rank::Top => "Top",
        Rank::Bottom => "Bottom",
    };
    let measure = match selection.column {
        NumericColumn::ReviewsTotal => "Reviews Total",
        _ => "Revenue",
    };
    format!("{} Distribution of {} {} Games", measure, rank, n)
}

/// The `n` highest or lowest titles by the selected column
///
/// Ties keep file order.
pub fn pie_chart(table: &GameTable, selection: PieSelection, n: usize) -> Chart {
    let column = selection.column;
    let mut games: Vec<&GameRecord> = table.records().iter().collect();
    match selection.rank {
        Rank::Top => games.sort_by(|a, b| b.value(column).total_cmp(&a.value(column))),
        Rank::Bottom => games.sort_by(|a, b| a.value(column).total_cmp(&b.value(column))),
    }

    let points = games
        .into_iter()
        .take(n)
        .map(|g| Point::new(g.title.as_str(), g.value(column)))
        .collect();

    Chart::new(ChartKind::Pie, title(selection, n), "Title", column.display_name())
        .with_series(Series::new(column.key(), ChartKind::Pie, points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::XValue;
    use crate::views::test_support::game;

    fn table() -> GameTable {
        GameTable::new(
            (1..=12)
                .map(|i| game(&format!("g{}", i), 1.0, (13 - i) as f64, i as f64 * 100.0, 2000, 1))
                .collect(),
        )
    }

    #[test]
    fn test_top_revenue() {
        let chart = pie_chart(
            &table(),
            PieSelection::new(Rank::Top, NumericColumn::RevenueEstimated),
            10,
        );
        assert_eq!(chart.title, "Revenue Distribution of Top 10 Games");
        let series = chart.primary().unwrap();
        assert_eq!(series.points.len(), 10);
        assert_eq!(series.points[0].x, XValue::from("g12"));
        assert_eq!(series.points[0].y, 1200.0);
        assert_eq!(series.points[9].x, XValue::from("g3"));
    }

    #[test]
    fn test_bottom_reviews() {
        let chart = pie_chart(
            &table(),
            PieSelection::new(Rank::Bottom, NumericColumn::ReviewsTotal),
            3,
        );
        assert_eq!(chart.title, "Reviews Total Distribution of Bottom 3 Games");
        let ys = chart.primary().unwrap().ys();
        assert_eq!(ys, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_fewer_rows_than_n() {
        let chart = pie_chart(
            &GameTable::default(),
            PieSelection::new(Rank::Top, NumericColumn::RevenueEstimated),
            10,
        );
        assert!(chart.primary().unwrap().points.is_empty());
    }
}
