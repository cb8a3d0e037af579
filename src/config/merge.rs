//! Apply CLI overrides on top of a loaded config

use super::Config;
use crate::count::Whitespace;
use crate::render::OutputFormat;

/// Values given on the command line. `None`/`false` means "not given".
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub whitespace: Option<Whitespace>,
    pub format: Option<OutputFormat>,
    pub stats: bool,
    pub encoding: Option<String>,
    pub max_bytes: Option<usize>,
    pub include_binary: bool,
}

pub fn merge_cli_with_config(mut config: Config, cli: CliOverrides) -> Config {
    if let Some(whitespace) = cli.whitespace {
        config.whitespace = whitespace;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    if cli.stats {
        config.stats = true;
    }
    if cli.encoding.is_some() {
        config.encoding = cli.encoding;
    }
    if cli.max_bytes.is_some() {
        config.max_bytes = cli.max_bytes;
    }
    if cli.include_binary {
        config.include_binary = true;
    }
    config
}
