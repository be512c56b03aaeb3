//! Coercion of raw text fields into typed values
//!
//! Anything that does not parse becomes `None`; rows are dropped later by
//! whoever needs the field, never here.

use chrono::{NaiveDate, NaiveDateTime};

/// Full date formats tried in order
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %b, %Y",
    "%d %B, %Y",
    "%d %b %Y",
    "%d %B %Y",
];

/// Date-time formats, the time part is discarded
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Month-only formats, resolved to the first day of the month
const MONTH_FORMATS: &[&str] = &["%b %Y", "%B %Y"];

/// Parse a numeric field
///
/// Accepts integer, decimal and scientific notation. Empty strings,
/// non-numeric text and non-finite values yield `None`.
pub fn parse_numeric(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a release date in any of the supported layouts
pub fn parse_release_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| {
            // chrono needs a day to build a date
            let padded = format!("1 {}", s);
            MONTH_FORMATS.iter().find_map(|fmt| {
                NaiveDate::parse_from_str(&padded, &format!("%d {}", fmt)).ok()
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("19.99", Some(19.99))]
    #[case(" 42 ", Some(42.0))]
    #[case("1.5e6", Some(1_500_000.0))]
    #[case("0", Some(0.0))]
    #[case("", None)]
    #[case("free", None)]
    #[case("$19.99", None)]
    #[case("nan", None)]
    #[case("inf", None)]
    fn test_parse_numeric(#[case] input: &str, #[case] expected: Option<f64>) {
        assert_eq!(parse_numeric(input), expected);
    }

    #[rstest]
    #[case("2019-04-23", 2019, 4, 23)]
    #[case("2019/04/23", 2019, 4, 23)]
    #[case("04/23/2019", 2019, 4, 23)]
    #[case("Apr 23, 2019", 2019, 4, 23)]
    #[case("April 23, 2019", 2019, 4, 23)]
    #[case("23 Apr, 2019", 2019, 4, 23)]
    #[case("2019-04-23 12:30:00", 2019, 4, 23)]
    #[case("Apr 2019", 2019, 4, 1)]
    fn test_parse_release_date(
        #[case] input: &str,
        #[case] y: i32,
        #[case] m: u32,
        #[case] d: u32,
    ) {
        assert_eq!(parse_release_date(input), NaiveDate::from_ymd_opt(y, m, d));
    }

    #[rstest]
    #[case("")]
    #[case("coming soon")]
    #[case("2019-13-40")]
    fn test_parse_release_date_invalid(#[case] input: &str) {
        assert_eq!(parse_release_date(input), None);
    }
}
