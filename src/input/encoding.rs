//! Encoding detection and binary sniffing over byte samples.
//!
//! Detection order:
//! - BOM markers (UTF-8, UTF-16 LE/BE)
//! - strict UTF-8 validation
//! - chardetng guess for everything else
//!
//! `complete` tells each function whether `sample` is the whole input or only
//! its head, in which case a multi-byte sequence may be cut off at the end.

use chardetng::EncodingDetector;
use encoding_rs::{DecoderResult, Encoding, UTF_8};

pub const DEFAULT_SAMPLE_SIZE: usize = 8192;

/// Share of printable ASCII below which an undecodable sample is binary.
const PRINTABLE_RATIO: f64 = 0.70;

pub fn detect_encoding(sample: &[u8], complete: bool) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(sample) {
        return encoding;
    }

    if is_utf8(sample, complete) {
        return UTF_8;
    }

    let mut detector = EncodingDetector::new();
    detector.feed(sample, complete);
    detector.guess(None, true)
}

/// Normalized, lowercase label for reporting (e.g. "utf-8", "utf-8-sig",
/// "utf-16le", "windows-1252").
pub fn encoding_label(encoding: &'static Encoding, bytes: &[u8]) -> String {
    let has_bom = matches!(Encoding::for_bom(bytes), Some((enc, _)) if enc == encoding);
    if encoding == UTF_8 && has_bom {
        "utf-8-sig".to_string()
    } else {
        encoding.name().to_lowercase()
    }
}

/// Heuristic binary check on the head of an input whose encoding is unknown.
///
/// - a BOM means text
/// - a NUL byte means binary
/// - valid UTF-8 means text
/// - otherwise the sample is decoded with chardetng's guess; a clean decode
///   with no control characters means text (Cyrillic, Greek, Hebrew and other
///   single-byte scripts land here)
/// - failing all that, fewer than 70% printable ASCII bytes means binary
pub fn looks_binary(sample: &[u8], complete: bool) -> bool {
    if Encoding::for_bom(sample).is_some() {
        return false;
    }

    if sample.is_empty() {
        return false;
    }

    if sample.contains(&0) {
        return true;
    }

    if is_utf8(sample, complete) {
        return false;
    }

    let guess = detect_encoding(sample, complete);
    if let Some(text) = decode_strict(guess, sample, complete) {
        if !has_binary_controls(&text) {
            return false;
        }
    }

    let printable_count = sample
        .iter()
        .filter(|&&b| (32..=126).contains(&b) || b == 9 || b == 10 || b == 13)
        .count();

    (printable_count as f64 / sample.len() as f64) < PRINTABLE_RATIO
}

/// Whether decoded text contains NUL or control characters that do not occur
/// in text files. Tab, LF, VT, FF and CR are allowed.
pub fn has_binary_controls(text: &str) -> bool {
    text.chars()
        .take(DEFAULT_SAMPLE_SIZE)
        .any(|c| c.is_control() && !matches!(c, '\t' | '\n' | '\x0B' | '\x0C' | '\r'))
}

/// Valid UTF-8, ignoring a sequence cut off by the end of an incomplete
/// sample.
fn is_utf8(sample: &[u8], complete: bool) -> bool {
    match std::str::from_utf8(sample) {
        Ok(_) => true,
        Err(e) => !complete && e.error_len().is_none(),
    }
}

/// Decode without replacement; `None` if any sequence is malformed.
fn decode_strict(encoding: &'static Encoding, sample: &[u8], complete: bool) -> Option<String> {
    let mut decoder = encoding.new_decoder_without_bom_handling();
    let capacity = decoder.max_utf8_buffer_length_without_replacement(sample.len())?;
    let mut text = String::with_capacity(capacity);
    let (result, _read) =
        decoder.decode_to_string_without_replacement(sample, &mut text, complete);
    match result {
        DecoderResult::InputEmpty => Some(text),
        DecoderResult::OutputFull | DecoderResult::Malformed(_, _) => None,
    }
}
