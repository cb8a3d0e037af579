//! Configuration loading and merging
//!
//! Handles loading from config files and CLI arguments with proper
//! precedence (CLI > File > Defaults).

use serde::Deserialize;

use crate::count::Whitespace;
use crate::input::ReadOptions;
use crate::render::OutputFormat;

pub mod loader;
pub mod merge;

pub use loader::load_config;
pub use merge::{merge_cli_with_config, CliOverrides};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub whitespace: Whitespace,
    pub format: OutputFormat,
    pub stats: bool,
    pub encoding: Option<String>,
    pub max_bytes: Option<usize>,
    pub include_binary: bool,
}

impl Config {
    pub fn read_options(&self) -> ReadOptions {
        ReadOptions {
            encoding: self.encoding.clone(),
            max_bytes: self.max_bytes,
            include_binary: self.include_binary,
        }
    }
}
