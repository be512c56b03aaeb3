//! Chart-ready series handed to the presentation layer

use serde::{Deserialize, Serialize};

/// How a chart or series should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Scatter,
    /// Scatter points plus a fitted line
    ScatterWithFit,
}

/// X coordinate, either a category label or a number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum XValue {
    Category(String),
    Number(f64),
}

impl From<&str> for XValue {
    fn from(s: &str) -> Self {
        XValue::Category(s.to_string())
    }
}

impl From<String> for XValue {
    fn from(s: String) -> Self {
        XValue::Category(s)
    }
}

impl From<f64> for XValue {
    fn from(x: f64) -> Self {
        XValue::Number(x)
    }
}

impl From<i32> for XValue {
    fn from(x: i32) -> Self {
        XValue::Number(x as f64)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: XValue,
    pub y: f64,
}

impl Point {
    pub fn new(x: impl Into<XValue>, y: f64) -> Self {
        Self { x: x.into(), y }
    }
}

/// A named sequence of points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub kind: ChartKind,
    pub points: Vec<Point>,
}

impl Series {
    pub fn new(name: impl Into<String>, kind: ChartKind, points: Vec<Point>) -> Self {
        Self {
            name: name.into(),
            kind,
            points,
        }
    }

    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }
}

/// A complete chart description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
}

impl Chart {
    pub fn new(
        kind: ChartKind,
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            series: Vec::new(),
        }
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    /// First series, the only one for most charts
    pub fn primary(&self) -> Option<&Series> {
        self.series.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xvalue_serializes_untagged() {
        let p = Point::new("Jan", 3.0);
        assert_eq!(serde_json::to_string(&p).unwrap(), r#"{"x":"Jan","y":3.0}"#);
        let p = Point::new(1999, 2.0);
        assert_eq!(serde_json::to_string(&p).unwrap(), r#"{"x":1999.0,"y":2.0}"#);
    }

    #[test]
    fn test_chart_kind_snake_case() {
        assert_eq!(
            serde_json::to_string(&ChartKind::ScatterWithFit).unwrap(),
            "\"scatter_with_fit\""
        );
    }
}
