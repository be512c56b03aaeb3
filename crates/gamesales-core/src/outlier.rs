//! Table-level IQR filtering

use gamesales_io::{NumericColumn, NumericRecord};
use gamesales_stats::filter_iqr_by;
use tracing::debug;

/// Keep rows whose values lie inside each column's IQR fence
///
/// Columns are applied in order and each fence is computed from the rows
/// that survived the previous columns. Rows missing a listed column are
/// dropped.
pub fn filter_iqr<R>(rows: Vec<R>, columns: &[NumericColumn]) -> Vec<R>
where
    R: NumericRecord,
{
    let before = rows.len();
    let extractors: Vec<_> = columns
        .iter()
        .map(|&column| move |row: &R| row.numeric(column))
        .collect();
    let kept = filter_iqr_by(rows, &extractors);

    debug!(
        before,
        after = kept.len(),
        columns = ?columns,
        "iqr filter"
    );
    kept
}
