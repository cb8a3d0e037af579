//! JSON rendering

use crate::domain::CountReport;

pub fn render_json(report: &CountReport) -> String {
    match serde_json::to_string_pretty(report) {
        Ok(json) => format!("{}\n", json),
        Err(e) => {
            // CountReport holds only strings and integers.
            tracing::error!("Failed to serialize report: {}", e);
            String::from("{}\n")
        }
    }
}
