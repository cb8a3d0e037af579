//! count-words: count whitespace-delimited words in text
//!
//! The core is [`count_words`], a single-pass, allocation-free scan. Around it
//! sit a streaming [`WordCounter`], encoding-aware input reading, and report
//! rendering used by the `count-words` binary.

pub mod config;
pub mod count;
pub mod domain;
pub mod input;
pub mod render;

pub use count::{
    count_words, count_words_bytes, count_words_with, TextStats, Whitespace, WordCounter,
};
pub use domain::{CountReport, FileCount, Skipped};
pub use input::{
    decode_bytes, read_text, stream_file, stream_stdin, stream_text, DecodedText, InputError,
    ReadOptions,
};
pub use render::OutputFormat;
