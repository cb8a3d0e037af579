//! Streaming counter and per-input statistics

use super::{is_c_space, Whitespace};
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Counts gathered in one pass over a text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    /// Number of `\n` characters, matching `wc -l`.
    pub lines: usize,
    pub words: usize,
    /// Unicode scalar values (or bytes, for input fed with `feed_bytes`).
    pub chars: usize,
    pub bytes: usize,
}

impl TextStats {
    pub fn of(text: &str, whitespace: Whitespace) -> Self {
        let mut counter = WordCounter::new(whitespace);
        counter.feed(text);
        counter.finish()
    }
}

impl Add for TextStats {
    type Output = TextStats;

    fn add(self, rhs: TextStats) -> TextStats {
        TextStats {
            lines: self.lines + rhs.lines,
            words: self.words + rhs.words,
            chars: self.chars + rhs.chars,
            bytes: self.bytes + rhs.bytes,
        }
    }
}

impl AddAssign for TextStats {
    fn add_assign(&mut self, rhs: TextStats) {
        *self = *self + rhs;
    }
}

impl Sum for TextStats {
    fn sum<I: Iterator<Item = TextStats>>(iter: I) -> Self {
        iter.fold(TextStats::default(), Add::add)
    }
}

/// Word counter that keeps its "inside a word" state between calls, so a
/// text split at arbitrary points counts the same as the whole.
///
/// ```
/// use count_words::{WordCounter, Whitespace};
///
/// let mut counter = WordCounter::new(Whitespace::Unicode);
/// counter.feed("hel");
/// counter.feed("lo world");
/// assert_eq!(counter.words(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WordCounter {
    whitespace: Whitespace,
    in_word: bool,
    stats: TextStats,
}

impl WordCounter {
    pub fn new(whitespace: Whitespace) -> Self {
        Self { whitespace, in_word: false, stats: TextStats::default() }
    }

    pub fn feed(&mut self, chunk: &str) {
        for c in chunk.chars() {
            self.stats.chars += 1;
            if c == '\n' {
                self.stats.lines += 1;
            }
            if self.whitespace.is_separator(c) {
                self.in_word = false;
            } else if !self.in_word {
                self.in_word = true;
                self.stats.words += 1;
            }
        }
        self.stats.bytes += chunk.len();
    }

    /// Feed raw bytes, classifying each byte with the ASCII policy regardless
    /// of the counter's configured policy. Each byte counts as one char.
    pub fn feed_bytes(&mut self, chunk: &[u8]) {
        for &b in chunk {
            if b == b'\n' {
                self.stats.lines += 1;
            }
            if is_c_space(b) {
                self.in_word = false;
            } else if !self.in_word {
                self.in_word = true;
                self.stats.words += 1;
            }
        }
        self.stats.chars += chunk.len();
        self.stats.bytes += chunk.len();
    }

    pub fn words(&self) -> usize {
        self.stats.words
    }

    pub fn finish(self) -> TextStats {
        self.stats
    }
}
