//! Word counting
//!
//! A word is a maximal run of non-whitespace characters. Counting is a single
//! left-to-right pass that tracks whether the previous character was inside a
//! word; a word is counted the moment its first character is seen.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod counter;

pub use counter::{TextStats, WordCounter};

/// Which characters separate words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Whitespace {
    /// The Unicode `White_Space` property (`char::is_whitespace`).
    #[default]
    Unicode,
    /// The C-locale `isspace` set: space, `\t`, `\n`, `\x0B`, `\x0C`, `\r`.
    Ascii,
}

impl Whitespace {
    /// Whether `c` separates words under this policy.
    #[inline]
    pub fn is_separator(self, c: char) -> bool {
        match self {
            Whitespace::Unicode => c.is_whitespace(),
            Whitespace::Ascii => c.is_ascii() && is_c_space(c as u8),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Whitespace::Unicode => "unicode",
            Whitespace::Ascii => "ascii",
        }
    }
}

impl fmt::Display for Whitespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Whitespace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unicode" => Ok(Whitespace::Unicode),
            "ascii" => Ok(Whitespace::Ascii),
            other => {
                Err(format!("Invalid whitespace policy '{}': expected unicode or ascii", other))
            }
        }
    }
}

/// `u8::is_ascii_whitespace` omits vertical tab; C's `isspace` does not.
#[inline]
pub(crate) fn is_c_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Count the words in `text`, treating every Unicode whitespace character as a
/// separator.
///
/// ```
/// assert_eq!(count_words::count_words("Zig is awesome"), 3);
/// assert_eq!(count_words::count_words("  hello   world  "), 2);
/// ```
pub fn count_words(text: &str) -> usize {
    count_words_with(text, Whitespace::Unicode)
}

/// Count the words in `text` under the given whitespace policy.
pub fn count_words_with(text: &str, whitespace: Whitespace) -> usize {
    let mut count = 0;
    let mut in_word = false;
    for c in text.chars() {
        if whitespace.is_separator(c) {
            in_word = false;
        } else if !in_word {
            in_word = true;
            count += 1;
        }
    }
    count
}

/// Count the words in an undecoded buffer using the ASCII policy.
///
/// The slice length is authoritative: NUL and bytes above 0x7F are word bytes
/// like any other non-space byte.
pub fn count_words_bytes(bytes: &[u8]) -> usize {
    let mut count = 0;
    let mut in_word = false;
    for &b in bytes {
        if is_c_space(b) {
            in_word = false;
        } else if !in_word {
            in_word = true;
            count += 1;
        }
    }
    count
}
