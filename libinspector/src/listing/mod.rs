use lazy_static::lazy_static;
use libpvmisa::{
    instruction::{
        decode,
        load::{LoadLength, LoadType},
        operation::Operation,
        register::Register,
        Decoded, Instruction,
    },
    UnknownName, Word,
};
use log::{info, trace};
use thiserror::Error;

#[cfg(test)]
mod tests;

lazy_static! {
    static ref VALID_WORDS: Vec<Word> = scan_valid_words();
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Unknown filter \"{0}\"")]
    UnknownKey(String),

    #[error("Filter needs the form key=value, got \"{0}\"")]
    MissingValue(String),

    #[error(transparent)]
    BadValue(#[from] UnknownName),
}

/// Restricts a listing to instructions with the given field values. An empty filter
/// matches every legal word, the no-op sentinel included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListFilter {
    pub operation: Option<Operation>,
    pub load_type: Option<LoadType>,
    pub load_length: Option<LoadLength>,
    pub source: Option<Register>,
    pub destination: Option<Register>,
}

impl ListFilter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Applies a `key=value` pair, e.g. `operation=divide` or `src=a`.
    pub fn apply(&mut self, pair: &str) -> Result<(), FilterError> {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| FilterError::MissingValue(pair.to_string()))?;

        match key {
            "operation" | "op" => self.operation = Some(value.parse()?),
            "load-type" | "type" => self.load_type = Some(value.parse()?),
            "load-length" | "length" | "len" => self.load_length = Some(value.parse()?),
            "source" | "src" => self.source = Some(value.parse()?),
            "destination" | "dst" => self.destination = Some(value.parse()?),
            _ => return Err(FilterError::UnknownKey(key.to_string())),
        }

        Ok(())
    }

    pub fn matches(&self, decoded: &Decoded) -> bool {
        match decoded {
            Decoded::Nop => self.is_empty(),
            Decoded::Instruction(instruction) => self.matches_instruction(instruction),
        }
    }

    fn matches_instruction(&self, instruction: &Instruction) -> bool {
        fn field_matches<T: PartialEq>(filter: Option<T>, value: T) -> bool {
            filter.map_or(true, |expected| expected == value)
        }

        field_matches(self.operation, instruction.operation)
            && field_matches(self.load_type, instruction.load_type)
            && field_matches(self.load_length, instruction.load_length)
            && field_matches(self.source, instruction.source)
            && field_matches(self.destination, instruction.destination)
    }
}

fn scan_valid_words() -> Vec<Word> {
    let words: Vec<Word> = (0..=Word::MAX)
        .filter(|word| match decode(*word) {
            Ok(_) => true,
            Err(reason) => {
                trace!("{:04X} rejected: {}", word, reason);
                false
            }
        })
        .collect();

    info!("Scanned {} valid instruction words", words.len());
    words
}

/// Every word that decodes successfully, in ascending order.
pub fn valid_words() -> &'static [Word] {
    &VALID_WORDS
}

/// Valid words matching `filter`, paired with their decoding.
pub fn list(filter: ListFilter) -> impl Iterator<Item = (Word, Decoded)> {
    valid_words().iter().filter_map(move |word| {
        decode(*word)
            .ok()
            .filter(|decoded| filter.matches(decoded))
            .map(|decoded| (*word, decoded))
    })
}

/// All valid words as uppercase hex, each followed by a comma.
pub fn lookup_table() -> String {
    valid_words()
        .iter()
        .map(|word| format!("{:04X},", word))
        .collect()
}
