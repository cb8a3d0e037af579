//! Report rendering

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::CountReport;

pub mod json;
pub mod text;

pub use json::render_json;
pub use text::render_text;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Invalid output format '{}': expected text or json", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

pub fn render(report: &CountReport, format: OutputFormat, show_stats: bool) -> String {
    match format {
        OutputFormat::Text => render_text(report, show_stats),
        OutputFormat::Json => render_json(report),
    }
}

/// Format an integer with thousands separators, e.g. `1234567` -> `1,234,567`.
pub fn format_with_commas(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
