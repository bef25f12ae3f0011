use thiserror::Error;

pub mod instruction;

pub type Word = u16;

pub const REGISTER_COUNT: usize = 16;

/// Word reserved as the whole-word no-op. Never field decoded.
pub const NOP_WORD: Word = 0xFFFF;

/// The all-zero word is reserved and never a legal encoding.
pub const ZERO_WORD: Word = 0x0000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown {table} name \"{name}\"")]
pub struct UnknownName {
    pub table: &'static str,
    pub name: String,
}
