use std::{fmt::Display, str::FromStr};

use bimap::BiMap;
use lazy_static::lazy_static;

use crate::UnknownName;

lazy_static! {
    static ref LOAD_TYPE_NAME_BIMAP: BiMap<LoadType, &'static str> = BiMap::from_iter(
        LoadType::ALL
            .into_iter()
            .map(|load_type| (load_type, load_type.mnemonic()))
    );
    static ref LOAD_LENGTH_NAME_BIMAP: BiMap<LoadLength, &'static str> = BiMap::from_iter(
        LoadLength::ALL
            .into_iter()
            .map(|load_length| (load_length, load_length.mnemonic()))
    );
}

/// Addressing mode of the load operand, bits 4-5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum LoadType {
    Register = 0,
    Ram = 1,
    Immediate = 2,
    None = 3,
}

impl LoadType {
    pub const ALL: [Self; 4] = [Self::Register, Self::Ram, Self::Immediate, Self::None];

    pub const fn from_bits(bits: u8) -> Self {
        Self::ALL[(bits & 0b11) as usize]
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Register => "register",
            Self::Ram => "ram",
            Self::Immediate => "immediate",
            Self::None => "none",
        }
    }
}

impl Display for LoadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl FromStr for LoadType {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LOAD_TYPE_NAME_BIMAP
            .get_by_right(s)
            .copied()
            .ok_or_else(|| UnknownName {
                table: "load type",
                name: s.to_string(),
            })
    }
}

/// Operand width, bits 6-7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum LoadLength {
    Byte = 0,
    Word = 1,
    DWord = 2,
    QWord = 3,
}

impl LoadLength {
    pub const ALL: [Self; 4] = [Self::Byte, Self::Word, Self::DWord, Self::QWord];

    pub const fn from_bits(bits: u8) -> Self {
        Self::ALL[(bits & 0b11) as usize]
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn bytes(self) -> u8 {
        1 << self.index()
    }

    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Byte => "1 byte",
            Self::Word => "2 byte",
            Self::DWord => "4 byte",
            Self::QWord => "8 byte",
        }
    }
}

impl Display for LoadLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl FromStr for LoadLength {
    type Err = UnknownName;

    /// Accepts either the mnemonic ("4 byte") or the bare byte count ("4").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(load_length) = LOAD_LENGTH_NAME_BIMAP.get_by_right(s) {
            return Ok(*load_length);
        }

        s.parse::<u8>()
            .ok()
            .and_then(|bytes| {
                Self::ALL
                    .into_iter()
                    .find(|load_length| load_length.bytes() == bytes)
            })
            .ok_or_else(|| UnknownName {
                table: "load length",
                name: s.to_string(),
            })
    }
}
