use std::{fmt::Display, str::FromStr};

use bimap::BiMap;
use lazy_static::lazy_static;

use crate::UnknownName;

lazy_static! {
    // Reserved slots share a mnemonic and can't be named.
    static ref REGISTER_NAME_BIMAP: BiMap<Register, &'static str> = BiMap::from_iter(
        Register::ALL
            .into_iter()
            .filter(|register| !register.is_reserved())
            .map(|register| (register, register.mnemonic()))
    );
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Register {
    A = 0,
    X = 1,
    Y = 2,
    B = 3,
    W = 4,
    Z = 5,
    C = 6,
    D = 7,

    Pc = 8,
    Sb = 9,
    Sp = 10,
    Fl = 11,

    Reserved12 = 12,
    Reserved13 = 13,
    Reserved14 = 14,

    /// No register at all, used by control operations without an operand.
    None = 15,
}

impl Register {
    pub const ALL: [Self; crate::REGISTER_COUNT] = [
        Self::A,
        Self::X,
        Self::Y,
        Self::B,
        Self::W,
        Self::Z,
        Self::C,
        Self::D,
        Self::Pc,
        Self::Sb,
        Self::Sp,
        Self::Fl,
        Self::Reserved12,
        Self::Reserved13,
        Self::Reserved14,
        Self::None,
    ];

    pub const fn from_bits(bits: u8) -> Self {
        Self::ALL[(bits & 0xF) as usize]
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn is_reserved(self) -> bool {
        matches!(self, Self::Reserved12 | Self::Reserved13 | Self::Reserved14)
    }

    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::X => "x",
            Self::Y => "y",
            Self::B => "b",
            Self::W => "w",
            Self::Z => "z",
            Self::C => "c",
            Self::D => "d",
            Self::Pc => "pc",
            Self::Sb => "sb",
            Self::Sp => "sp",
            Self::Fl => "fl",
            Self::Reserved12 | Self::Reserved13 | Self::Reserved14 => "reserved",
            Self::None => "none",
        }
    }
}

impl Display for Register {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl FromStr for Register {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        REGISTER_NAME_BIMAP
            .get_by_right(s)
            .copied()
            .ok_or_else(|| UnknownName {
                table: "register",
                name: s.to_string(),
            })
    }
}
