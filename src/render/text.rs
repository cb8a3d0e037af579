//! Plain-text rendering

use super::format_with_commas;
use crate::count::TextStats;
use crate::domain::CountReport;

/// Render `report` for a terminal.
///
/// A single input prints `Word count: N`. Several inputs print one row per
/// input followed by a `total` row. Counts are plain integers except in the
/// lines/words/chars/bytes table that `show_stats` switches to.
pub fn render_text(report: &CountReport, show_stats: bool) -> String {
    if show_stats {
        return render_stats_table(report);
    }

    if report.files.len() <= 1 {
        return format!("Word count: {}\n", report.total.words);
    }

    let width = report.total.words.to_string().len();
    let mut out = String::new();
    for file in &report.files {
        out.push_str(&format!("{:>width$}  {}\n", file.stats.words, file.source, width = width));
    }
    out.push_str(&format!("{:>width$}  total\n", report.total.words, width = width));
    out
}

fn render_stats_table(report: &CountReport) -> String {
    let headers = ["lines", "words", "chars", "bytes"];
    let width = stats_columns(&report.total)
        .iter()
        .map(String::len)
        .chain(headers.iter().map(|h| h.len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let header: Vec<String> =
        headers.iter().map(|h| format!("{:>width$}", h, width = width)).collect();
    out.push_str(&format!("{}  source\n", header.join(" ")));

    for file in &report.files {
        out.push_str(&stats_row(&file.stats, &file.source, width));
    }
    if report.files.len() > 1 {
        out.push_str(&stats_row(&report.total, "total", width));
    }
    out
}

fn stats_columns(stats: &TextStats) -> [String; 4] {
    [
        format_with_commas(stats.lines),
        format_with_commas(stats.words),
        format_with_commas(stats.chars),
        format_with_commas(stats.bytes),
    ]
}

fn stats_row(stats: &TextStats, label: &str, width: usize) -> String {
    let cells: Vec<String> =
        stats_columns(stats).iter().map(|c| format!("{:>width$}", c, width = width)).collect();
    format!("{}  {}\n", cells.join(" "), label)
}
