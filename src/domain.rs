//! Report types shared between counting, rendering, and the CLI

use crate::count::TextStats;
use serde::Serialize;

/// Source label for text passed inline rather than read from a file.
pub const INLINE_SOURCE: &str = "<text>";

/// Counts for a single input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileCount {
    pub source: String,
    pub encoding: String,
    #[serde(flatten)]
    pub stats: TextStats,
}

/// An input that was not counted, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skipped {
    pub source: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CountReport {
    pub files: Vec<FileCount>,
    pub skipped: Vec<Skipped>,
    pub total: TextStats,
}

impl CountReport {
    pub fn new(files: Vec<FileCount>, skipped: Vec<Skipped>) -> Self {
        let total = files.iter().map(|f| f.stats).sum();
        Self { files, skipped, total }
    }
}
