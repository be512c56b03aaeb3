//! Frequency distribution table for one column

use gamesales_io::{GameTable, NumericColumn};
use gamesales_stats::{build_frequency_table, BinSpec, FrequencyTable};
use serde::{Deserialize, Serialize};

use crate::error::DashboardResult;

/// Frequency table plus the column it was built from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyView {
    pub column: NumericColumn,
    pub table: FrequencyTable,
}

impl FrequencyView {
    /// Rows as display strings: range, frequency, cumulative, percent
    pub fn display_rows(&self) -> Vec<[String; 4]> {
        self.table
            .rows
            .iter()
            .map(|r| {
                [
                    r.bucket.label.clone(),
                    r.count.to_string(),
                    r.cumulative.to_string(),
                    format!("{:.2}", r.relative_pct),
                ]
            })
            .collect()
    }
}

/// Column headers matching `display_rows`
pub const FREQUENCY_HEADERS: [&str; 4] = [
    "Range",
    "Frequency",
    "Cumulative Frequency",
    "Relative Frequency (%)",
];

pub fn frequency_view(
    table: &GameTable,
    column: NumericColumn,
    spec: &BinSpec,
) -> DashboardResult<FrequencyView> {
    let values = table.column_values(column);
    let table = build_frequency_table(&values, spec)?;
    Ok(FrequencyView { column, table })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FrequencyPresets;
    use crate::views::test_support::game;

    #[test]
    fn test_launch_price_distribution() {
        let table = GameTable::new(vec![
            game("a", 0.0, 10.0, 100.0, 2010, 1),
            game("b", 9.99, 10.0, 100.0, 2010, 1),
            game("c", 19.99, 10.0, 100.0, 2010, 1),
            game("d", 59.99, 10.0, 100.0, 2010, 1),
            game("e", 69.99, 10.0, 100.0, 2010, 1),
        ]);
        let presets = FrequencyPresets::default();
        let view = frequency_view(
            &table,
            NumericColumn::LaunchPrice,
            presets.get(NumericColumn::LaunchPrice),
        )
        .unwrap();

        assert_eq!(view.table.counts(), vec![2, 1, 0, 0, 0, 1, 1]);
        let rows = view.display_rows();
        assert_eq!(rows[0], ["$0 - $10", "2", "2", "40.00"].map(String::from));
        assert_eq!(rows[6][0], ">$60");
        assert_eq!(rows[6][2], "5");
    }

    #[test]
    fn test_rejects_bad_spec() {
        let spec = BinSpec {
            bin_width: 0.0,
            upper_bound: 10.0,
            prefix: String::new(),
        };
        assert!(frequency_view(&GameTable::default(), NumericColumn::LaunchPrice, &spec).is_err());
    }
}
