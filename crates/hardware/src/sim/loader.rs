//! Image Loader.
//!
//! Program images are stored as hex tables, one or more 16-bit words per line:
//!
//! ```text
//! ; pointer = $80
//! 1080 129F
//! 0x1001      # a 0x prefix is accepted
//! ```
//!
//! `;` and `#` start a comment that runs to the end of the line. Words are
//! separated by any whitespace or commas.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

/// Errors produced while reading an image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A token is not a hexadecimal 16-bit word.
    #[error("line {line}: invalid image word '{token}'")]
    InvalidWord {
        /// 1-based line number.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// The image file could not be read.
    #[error("failed to read image: {0}")]
    Io(#[from] io::Error),
}

/// Parses a hex table into image words.
///
/// # Errors
///
/// Returns `LoadError::InvalidWord` for the first token that is not a hex word.
pub fn parse_hex_image(text: &str) -> Result<Vec<u16>, LoadError> {
    let mut words = Vec::new();
    for (idx, raw_line) in text.lines().enumerate() {
        let line = raw_line
            .split([';', '#'])
            .next()
            .unwrap_or_default();
        for token in line.split(|c: char| c.is_whitespace() || c == ',') {
            if token.is_empty() {
                continue;
            }
            words.push(parse_word(token).ok_or_else(|| LoadError::InvalidWord {
                line: idx + 1,
                token: token.to_string(),
            })?);
        }
    }
    Ok(words)
}

/// Reads and parses a hex image file.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read and `LoadError::InvalidWord`
/// if its contents do not parse.
pub fn load_image_file(path: impl AsRef<Path>) -> Result<Vec<u16>, LoadError> {
    let text = fs::read_to_string(path)?;
    parse_hex_image(&text)
}

fn parse_word(token: &str) -> Option<u16> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    if digits.is_empty() || digits.len() > 4 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(digits, 16).ok()
}
