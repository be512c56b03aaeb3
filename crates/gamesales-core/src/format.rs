//! Number formatting for measure tables

use serde::{Deserialize, Serialize};

/// Text shown where a statistic is undefined
pub const UNDEFINED: &str = "undefined";

/// Format with thousands separators and fixed decimals, e.g. `1,234.50`
pub fn format_thousands(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return UNDEFINED.to_string();
    }

    let digits = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Two-decimal thousands formatting for optional values
pub fn format_opt(value: Option<f64>) -> String {
    value
        .map(|v| format_thousands(v, 2))
        .unwrap_or_else(|| UNDEFINED.to_string())
}

/// Dollar amount in millions, e.g. `$2.50M`
pub fn format_millions(value: f64) -> String {
    format!("${:.2}M", value / 1_000_000.0)
}

/// One line of a measure/value table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measure {
    pub measure: String,
    pub value: String,
}

impl Measure {
    pub fn new(measure: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            measure: measure.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 2, "0.00")]
    #[case(999.999, 2, "1,000.00")]
    #[case(1234567.891, 2, "1,234,567.89")]
    #[case(-2500.5, 2, "-2,500.50")]
    #[case(123.0, 0, "123")]
    #[case(1000.0, 0, "1,000")]
    #[case(f64::NAN, 2, "undefined")]
    fn test_format_thousands(#[case] value: f64, #[case] decimals: usize, #[case] expected: &str) {
        assert_eq!(format_thousands(value, decimals), expected);
    }

    #[test]
    fn test_format_opt_and_millions() {
        assert_eq!(format_opt(None), "undefined");
        assert_eq!(format_opt(Some(15.811)), "15.81");
        assert_eq!(format_millions(2_500_000.0), "$2.50M");
    }
}
