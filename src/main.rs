//! count-words: count the words in text, files, and standard input

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
