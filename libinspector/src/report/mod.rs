use std::fmt::Display;

use libpvmisa::{
    instruction::{decode, Decoded, Fields, InvalidEncoding},
    Word,
};

#[cfg(test)]
mod tests;

/// Everything shown to the user about a single word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inspection {
    pub word: Word,
    pub outcome: Result<Decoded, InvalidEncoding>,
}

impl Inspection {
    pub fn new(word: Word) -> Self {
        Self {
            word,
            outcome: decode(word),
        }
    }

    pub fn is_legal(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Raw field split of the word, shown even for rejected words.
    pub fn fields(&self) -> Fields {
        Fields::from_word(self.word)
    }
}

impl Display for Inspection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.outcome {
            Ok(decoded) => writeln!(f, "{}", decoded)?,
            Err(reason) => writeln!(f, "{}", reason)?,
        }

        write!(f, "bit pattern: {}, hex: {:04X}", self.fields(), self.word)?;

        if let Some(instruction) = self.outcome.as_ref().ok().and_then(Decoded::instruction) {
            write!(f, "\nfamily: {}", instruction.family())?;
        }

        Ok(())
    }
}
