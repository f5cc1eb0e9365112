//! Text printed on every label instance.

use crate::config::LabelConfig;
use chrono::NaiveDate;
use serde::Serialize;

/// Product name printed above the hub.
pub const PRODUCT_NAME: &str = "Plutus";

/// Formats a date as `<abbreviated month> <day>, <year>`, e.g. `Jan 2, 2024`.
///
/// chrono's `%b` is always English, whatever the host locale.
pub fn format_label_date(date: &NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Wraps a version string in parentheses, with no added whitespace.
pub fn format_version(version: &str) -> String {
    format!("({version})")
}

/// Content shared by both label instances on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelContent {
    pub product_name: String,
    pub date: String,
    pub version_text: String,
}

impl LabelContent {
    pub fn new(config: &LabelConfig, now: &NaiveDate) -> Self {
        Self {
            product_name: PRODUCT_NAME.to_string(),
            date: format_label_date(now),
            version_text: format_version(config.version()),
        }
    }
}
