use std::{fmt::Display, str::FromStr};

use bimap::BiMap;
use lazy_static::lazy_static;

use crate::UnknownName;

lazy_static! {
    static ref OPERATION_NAME_BIMAP: BiMap<Operation, &'static str> = BiMap::from_iter(
        Operation::ALL
            .into_iter()
            .map(|operation| (operation, operation.mnemonic()))
    );
}

/// ALU/control opcode held in bits 0-3 of an instruction word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Operation {
    Sum = 0,
    Subtract = 1,
    Multiply = 2,
    Divide = 3,

    And = 4,
    Or = 5,
    Nand = 6,
    Nor = 7,
    Xor = 8,

    Bsl = 9,
    Bsr = 10,
    Rlr = 11,

    PopStack = 12,
    PushStack = 13,

    SwInterrupt = 14,
    Nop = 15,
}

impl Operation {
    pub const ALL: [Self; 16] = [
        Self::Sum,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::And,
        Self::Or,
        Self::Nand,
        Self::Nor,
        Self::Xor,
        Self::Bsl,
        Self::Bsr,
        Self::Rlr,
        Self::PopStack,
        Self::PushStack,
        Self::SwInterrupt,
        Self::Nop,
    ];

    /// Only the low four bits are looked at.
    pub const fn from_bits(bits: u8) -> Self {
        Self::ALL[(bits & 0xF) as usize]
    }

    pub const fn opcode(self) -> u8 {
        self as u8
    }

    pub const fn is_nop(self) -> bool {
        matches!(self, Self::Nop)
    }

    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::And => "and",
            Self::Or => "or",
            Self::Nand => "nand",
            Self::Nor => "nor",
            Self::Xor => "xor",
            Self::Bsl => "bsl",
            Self::Bsr => "bsr",
            Self::Rlr => "rlr",
            Self::PopStack => "pop stack",
            Self::PushStack => "push stack",
            Self::SwInterrupt => "sw interrupt",
            Self::Nop => "nop",
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl FromStr for Operation {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OPERATION_NAME_BIMAP
            .get_by_right(s)
            .copied()
            .ok_or_else(|| UnknownName {
                table: "operation",
                name: s.to_string(),
            })
    }
}
