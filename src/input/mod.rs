//! Reading text from files and standard input.
//!
//! Bytes are decoded with encoding detection so that legacy-encoded files
//! count the same words as their UTF-8 equivalent. Inputs are decoded in
//! fixed-size chunks, so callers can count without holding the whole text.

use encoding_rs::{CoderResult, Decoder, Encoding};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod encoding;

use encoding::{
    detect_encoding, encoding_label, has_binary_controls, looks_binary, DEFAULT_SAMPLE_SIZE,
};

/// Bytes read per chunk; the first chunk doubles as the detection sample.
const CHUNK_SIZE: usize = DEFAULT_SAMPLE_SIZE;

/// Source label used for standard input.
pub const STDIN_SOURCE: &str = "-";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Skipping binary input: {}", path.display())]
    Binary { path: PathBuf },

    #[error("Unknown encoding label '{label}'")]
    UnknownEncoding { label: String },
}

/// How input bytes are turned into text.
#[derive(Debug, Clone, Default)]
pub struct ReadOptions {
    /// Explicit encoding label; `None` enables detection.
    pub encoding: Option<String>,
    /// Truncate the decoded text to at most this many bytes, on a char
    /// boundary.
    pub max_bytes: Option<usize>,
    /// Decode inputs that look binary instead of rejecting them.
    pub include_binary: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding: String,
}

/// Stream a file through `on_text` in decoded chunks. Returns the encoding
/// label used.
pub fn stream_file(
    path: &Path,
    options: &ReadOptions,
    on_text: impl FnMut(&str),
) -> Result<String, InputError> {
    let file = File::open(path)
        .map_err(|source| InputError::Io { path: path.to_path_buf(), source })?;
    tracing::debug!("Streaming {}", path.display());
    stream_text(file, path, options, on_text)
}

pub fn stream_stdin(
    options: &ReadOptions,
    on_text: impl FnMut(&str),
) -> Result<String, InputError> {
    tracing::debug!("Streaming standard input");
    stream_text(std::io::stdin().lock(), Path::new(STDIN_SOURCE), options, on_text)
}

/// Decode `reader` chunk by chunk, handing each decoded piece to `on_text`.
///
/// The encoding is chosen from the first chunk: an explicit label wins,
/// otherwise a BOM, then strict UTF-8, then chardetng. The binary check also
/// runs on the first chunk, against the raw bytes when detecting and against
/// the decoded text when a label was given. `origin` is only used in errors
/// and logs.
pub fn stream_text<R: Read>(
    mut reader: R,
    origin: &Path,
    options: &ReadOptions,
    on_text: impl FnMut(&str),
) -> Result<String, InputError> {
    let io_error =
        |source: std::io::Error| InputError::Io { path: origin.to_path_buf(), source };

    let mut chunk = vec![0u8; CHUNK_SIZE];
    let mut filled = fill(&mut reader, &mut chunk).map_err(io_error)?;
    let mut eof = filled < chunk.len();
    let head = &chunk[..filled];

    let encoding = match options.encoding.as_deref() {
        Some(label) => {
            let encoding = Encoding::for_label(label.trim().as_bytes())
                .ok_or_else(|| InputError::UnknownEncoding { label: label.to_string() })?;
            if !options.include_binary {
                let (head_text, _, _) = encoding.decode(head);
                if has_binary_controls(&head_text) {
                    return Err(InputError::Binary { path: origin.to_path_buf() });
                }
            }
            encoding
        }
        None => {
            if !options.include_binary && looks_binary(head, eof) {
                return Err(InputError::Binary { path: origin.to_path_buf() });
            }
            detect_encoding(head, eof)
        }
    };

    // The decoder switches to a BOM's encoding the same way.
    let effective = Encoding::for_bom(head).map(|(bom, _)| bom).unwrap_or(encoding);
    let label = encoding_label(effective, head);

    let mut decoder = encoding.new_decoder();
    let mut sink = TextSink::new(on_text, options.max_bytes);
    loop {
        let keep_going = sink.decode(&mut decoder, &chunk[..filled], eof);
        if eof || !keep_going {
            break;
        }
        filled = fill(&mut reader, &mut chunk).map_err(io_error)?;
        eof = filled < chunk.len();
    }

    if sink.had_errors {
        tracing::warn!(
            "{} is not valid {}; malformed sequences were replaced",
            origin.display(),
            decoder.encoding().name()
        );
    }
    Ok(label)
}

pub fn read_text(path: &Path, options: &ReadOptions) -> Result<DecodedText, InputError> {
    let mut text = String::new();
    let encoding = stream_file(path, options, |piece| text.push_str(piece))?;
    Ok(DecodedText { text, encoding })
}

/// Decode an in-memory buffer read from `origin`.
pub fn decode_bytes(
    bytes: &[u8],
    origin: &Path,
    options: &ReadOptions,
) -> Result<DecodedText, InputError> {
    let mut text = String::new();
    let encoding = stream_text(bytes, origin, options, |piece| text.push_str(piece))?;
    Ok(DecodedText { text, encoding })
}

/// Collects decoder output and forwards it, enforcing `max_bytes`.
struct TextSink<F> {
    on_text: F,
    remaining: Option<usize>,
    buffer: String,
    had_errors: bool,
}

impl<F: FnMut(&str)> TextSink<F> {
    fn new(on_text: F, max_bytes: Option<usize>) -> Self {
        Self {
            on_text,
            remaining: max_bytes,
            buffer: String::with_capacity(CHUNK_SIZE * 3 + 16),
            had_errors: false,
        }
    }

    /// Returns false once the byte limit is reached.
    fn decode(&mut self, decoder: &mut Decoder, mut src: &[u8], last: bool) -> bool {
        loop {
            let (result, read, replaced) =
                decoder.decode_to_string(src, &mut self.buffer, last);
            src = &src[read..];
            self.had_errors |= replaced;

            let keep_going = self.emit();
            self.buffer.clear();
            if !keep_going {
                return false;
            }
            match result {
                CoderResult::InputEmpty => return true,
                CoderResult::OutputFull => {}
            }
        }
    }

    fn emit(&mut self) -> bool {
        let text = self.buffer.as_str();
        match self.remaining.as_mut() {
            None => {
                (self.on_text)(text);
                true
            }
            Some(left) if text.len() <= *left => {
                *left -= text.len();
                (self.on_text)(text);
                true
            }
            Some(left) => {
                let mut end = *left;
                while !text.is_char_boundary(end) {
                    end -= 1;
                }
                *left = 0;
                (self.on_text)(&text[..end]);
                false
            }
        }
    }
}

/// Read until `buf` is full or the reader is exhausted.
fn fill<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
