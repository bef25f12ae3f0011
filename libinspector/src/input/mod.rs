use libpvmisa::Word;
use thiserror::Error;


/// Maximum hex digits in an instruction word.
const WORD_DIGITS: usize = 4;

/// Text that can't be turned into an instruction word. This is never an encoding problem:
/// the decoder is not consulted until the text parses.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedInput {
    #[error("Empty input")]
    Empty,

    #[error("\"{0}\" is not a hexadecimal number")]
    NotHex(String),

    #[error("\"{0}\" is wider than a 16-bit instruction word")]
    TooWide(String),
}

/// Parses a hexadecimal instruction word, with or without a `0x` prefix.
pub fn parse_word(text: &str) -> Result<Word, MalformedInput> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.is_empty() {
        return Err(MalformedInput::Empty);
    }

    // `from_str_radix` would also take a leading sign.
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(MalformedInput::NotHex(trimmed.to_string()));
    }

    if digits.trim_start_matches('0').len() > WORD_DIGITS {
        return Err(MalformedInput::TooWide(trimmed.to_string()));
    }

    Word::from_str_radix(digits, 16).map_err(|_| MalformedInput::TooWide(trimmed.to_string()))
}
