use std::fmt::Display;

use load::{LoadLength, LoadType};
use operation::Operation;
use register::Register;
use thiserror::Error;

use crate::Word;

pub mod load;
pub mod operation;
pub mod register;


pub const OPERATION_MASK: Word = 0x000F;
pub const LOAD_TYPE_MASK: Word = 0x0030;
pub const LOAD_LENGTH_MASK: Word = 0x00C0;
pub const SOURCE_MASK: Word = 0x0F00;
pub const DESTINATION_MASK: Word = 0xF000;

pub const OPERATION_SHIFT: u32 = 0;
pub const LOAD_TYPE_SHIFT: u32 = 4;
pub const LOAD_LENGTH_SHIFT: u32 = 6;
pub const SOURCE_SHIFT: u32 = 8;
pub const DESTINATION_SHIFT: u32 = 12;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidEncoding {
    #[error("Invalid instruction, the all-zero word is reserved")]
    AllZeroReserved,

    #[error("Invalid instruction, source and destination are equal")]
    SourceEqualsDestination,

    #[error("Invalid instruction, no alu op and no load")]
    NoOperationNoLoad,

    #[error("Invalid instruction, alu op and load conflict")]
    OperationLoadConflict,
}

/// Raw field values of an instruction word, before any validation.
///
/// The five masks cover the word exactly once, so `Fields::from_word(word).to_word() == word`
/// holds for every word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fields {
    pub operation: u8,
    pub load_type: u8,
    pub load_length: u8,
    pub source: u8,
    pub destination: u8,
}

impl Fields {
    pub const fn from_word(word: Word) -> Self {
        Self {
            operation: ((word & OPERATION_MASK) >> OPERATION_SHIFT) as u8,
            load_type: ((word & LOAD_TYPE_MASK) >> LOAD_TYPE_SHIFT) as u8,
            load_length: ((word & LOAD_LENGTH_MASK) >> LOAD_LENGTH_SHIFT) as u8,
            source: ((word & SOURCE_MASK) >> SOURCE_SHIFT) as u8,
            destination: ((word & DESTINATION_MASK) >> DESTINATION_SHIFT) as u8,
        }
    }

    /// Packs the fields back into a word. Bits outside a field's width are dropped.
    pub const fn to_word(self) -> Word {
        ((self.operation as Word) << OPERATION_SHIFT) & OPERATION_MASK
            | ((self.load_type as Word) << LOAD_TYPE_SHIFT) & LOAD_TYPE_MASK
            | ((self.load_length as Word) << LOAD_LENGTH_SHIFT) & LOAD_LENGTH_MASK
            | ((self.source as Word) << SOURCE_SHIFT) & SOURCE_MASK
            | ((self.destination as Word) << DESTINATION_SHIFT) & DESTINATION_MASK
    }
}

impl Display for Fields {
    /// Most significant field first, matching the nibble order of the hex word.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04b} {:04b} {:02b} {:02b} {:04b}",
            self.destination, self.source, self.load_length, self.load_type, self.operation
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstructionFamily {
    /// `nop` opcode paired with a real load: moves data without touching the ALU.
    Load,
    /// ALU or control opcode.
    Operation,
}

impl Display for InstructionFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Load => "load",
            Self::Operation => "operation",
        })
    }
}

/// A legally encoded, field decoded instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instruction {
    pub operation: Operation,
    pub load_type: LoadType,
    pub load_length: LoadLength,
    pub source: Register,
    pub destination: Register,
}

impl Instruction {
    pub const fn fields(&self) -> Fields {
        Fields {
            operation: self.operation.opcode(),
            load_type: self.load_type.index(),
            load_length: self.load_length.index(),
            source: self.source.index(),
            destination: self.destination.index(),
        }
    }

    pub const fn word(&self) -> Word {
        self.fields().to_word()
    }

    pub const fn family(&self) -> InstructionFamily {
        if self.operation.is_nop() {
            InstructionFamily::Load
        } else {
            InstructionFamily::Operation
        }
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} wide with src: {} into {}",
            self.operation, self.load_type, self.load_length, self.source, self.destination
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decoded {
    /// The whole-word no-op, `NOP_WORD`.
    Nop,
    Instruction(Instruction),
}

impl Decoded {
    pub const fn instruction(&self) -> Option<&Instruction> {
        match self {
            Self::Nop => None,
            Self::Instruction(instruction) => Some(instruction),
        }
    }
}

impl Display for Decoded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nop => f.write_str("NOP"),
            Self::Instruction(instruction) => Display::fmt(instruction, f),
        }
    }
}

/// Decodes and validates a single instruction word.
///
/// Checks run in a fixed order and the first one that matches decides the outcome:
/// the no-op sentinel, the reserved zero word, equal source and destination fields,
/// then the two `load_type == none` rules.
pub fn decode(word: Word) -> Result<Decoded, InvalidEncoding> {
    if word == crate::NOP_WORD {
        return Ok(Decoded::Nop);
    }

    if word == crate::ZERO_WORD {
        return Err(InvalidEncoding::AllZeroReserved);
    }

    let fields = Fields::from_word(word);

    // Raw equality, so `none` into `none` is rejected as well.
    if fields.source == fields.destination {
        return Err(InvalidEncoding::SourceEqualsDestination);
    }

    let operation = Operation::from_bits(fields.operation);
    let load_type = LoadType::from_bits(fields.load_type);

    if load_type.is_none() {
        return Err(if operation.is_nop() {
            InvalidEncoding::NoOperationNoLoad
        } else {
            InvalidEncoding::OperationLoadConflict
        });
    }

    Ok(Decoded::Instruction(Instruction {
        operation,
        load_type,
        load_length: LoadLength::from_bits(fields.load_length),
        source: Register::from_bits(fields.source),
        destination: Register::from_bits(fields.destination),
    }))
}
