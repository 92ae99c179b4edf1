use std::fmt;

use serde::{Deserialize, Serialize};

/// Value shown on a metric card: a number, a string, or nothing yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for MetricValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for MetricValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<&str> for MetricValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for MetricValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// A label above a value, rendered as an HTML fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCard {
    pub label: String,
    pub value: Option<MetricValue>,
}

impl MetricCard {
    pub fn new(label: impl Into<String>, value: Option<MetricValue>) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    pub fn render(&self) -> String {
        let value = self
            .value
            .as_ref()
            .map(|v| escape_html(&v.to_string()))
            .unwrap_or_default();

        format!(
            "<div><p>{}</p><p>{}</p></div>",
            escape_html(&self.label),
            value
        )
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
