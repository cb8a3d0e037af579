//! Count command implementation

use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::io::Write;
use std::path::PathBuf;

use count_words::config::{load_config, merge_cli_with_config, CliOverrides, Config};
use count_words::domain::{CountReport, FileCount, Skipped, INLINE_SOURCE};
use count_words::input::{stream_file, stream_stdin, InputError, STDIN_SOURCE};
use count_words::render::{render, OutputFormat};
use count_words::{Whitespace, WordCounter};

#[derive(Args)]
pub struct CountArgs {
    /// Files to count ("-" reads standard input)
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Count this text instead of (or in addition to) files
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Which characters separate words: unicode or ascii
    #[arg(short, long, value_name = "POLICY")]
    pub whitespace: Option<String>,

    /// Output format: text or json
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Also report lines, chars, and bytes
    #[arg(short, long)]
    pub stats: bool,

    /// Decode inputs with this encoding instead of detecting it
    #[arg(long, value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Only count the first BYTES bytes of each file or standard input
    #[arg(long, value_name = "BYTES")]
    pub max_bytes: Option<usize>,

    /// Count files that look binary instead of skipping them
    #[arg(long)]
    pub include_binary: bool,

    /// Config file (default: count-words.toml in the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

enum Input {
    Inline(String),
    Stdin,
    File(PathBuf),
}

impl Input {
    fn source(&self) -> String {
        match self {
            Input::Inline(_) => INLINE_SOURCE.to_string(),
            Input::Stdin => STDIN_SOURCE.to_string(),
            Input::File(path) => path.display().to_string(),
        }
    }
}

pub fn run(args: CountArgs) -> Result<()> {
    let whitespace = args
        .whitespace
        .as_deref()
        .map(str::parse::<Whitespace>)
        .transpose()
        .map_err(anyhow::Error::msg)?;
    let format = args
        .format
        .as_deref()
        .map(str::parse::<OutputFormat>)
        .transpose()
        .map_err(anyhow::Error::msg)?;

    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    let file_config = load_config(&cwd, args.config.as_deref())?;
    let config = merge_cli_with_config(
        file_config,
        CliOverrides {
            whitespace,
            format,
            stats: args.stats,
            encoding: args.encoding,
            max_bytes: args.max_bytes,
            include_binary: args.include_binary,
        },
    );
    tracing::debug!("Effective config: {:?}", config);

    let inputs = collect_inputs(args.text, args.files);
    let results: Vec<(String, Result<FileCount, InputError>)> =
        inputs.par_iter().map(|input| (input.source(), count_input(input, &config))).collect();

    let mut files = Vec::new();
    let mut skipped = Vec::new();
    let mut failed = 0usize;
    for (source, result) in results {
        match result {
            Ok(count) => files.push(count),
            Err(e @ InputError::Binary { .. }) => {
                tracing::warn!("{}", e);
                skipped.push(Skipped { source, reason: "binary".to_string() });
            }
            Err(e) => {
                tracing::error!("{}", e);
                skipped.push(Skipped { source, reason: e.to_string() });
                failed += 1;
            }
        }
    }

    let total_inputs = files.len() + skipped.len();
    let report = CountReport::new(files, skipped);
    let output = render(&report, config.format, config.stats);
    std::io::stdout().lock().write_all(output.as_bytes()).context("Failed to write output")?;

    if failed > 0 {
        anyhow::bail!("Failed to read {} of {} inputs", failed, total_inputs);
    }
    Ok(())
}

fn collect_inputs(text: Option<String>, files: Vec<PathBuf>) -> Vec<Input> {
    let mut inputs = Vec::with_capacity(files.len() + 1);
    let no_files = files.is_empty();
    if let Some(text) = text {
        inputs.push(Input::Inline(text));
    } else if no_files {
        inputs.push(Input::Stdin);
    }
    inputs.extend(files.into_iter().map(|path| {
        if path.as_os_str() == STDIN_SOURCE {
            Input::Stdin
        } else {
            Input::File(path)
        }
    }));
    inputs
}

fn count_input(input: &Input, config: &Config) -> Result<FileCount, InputError> {
    let options = config.read_options();
    let mut counter = WordCounter::new(config.whitespace);
    let encoding = match input {
        Input::Inline(text) => {
            counter.feed(text);
            "utf-8".to_string()
        }
        Input::Stdin => stream_stdin(&options, |chunk| counter.feed(chunk))?,
        Input::File(path) => stream_file(path, &options, |chunk| counter.feed(chunk))?,
    };

    let stats = counter.finish();
    tracing::debug!("{}: {} words ({})", input.source(), stats.words, encoding);

    Ok(FileCount { source: input.source(), encoding, stats })
}
