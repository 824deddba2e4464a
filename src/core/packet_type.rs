// Message type ids and operator framing modes

use super::constants::{CHILD_COUNT_BITS, LENGTH_TYPE_BITS, TOTAL_LENGTH_BITS};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PacketTypeError {
    #[error("Invalid type id: {0}")]
    InvalidTypeId(u8),
}

/// The eight message kinds selected by the 3-bit type id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum PacketType {
    Sum = 0,
    Product = 1,
    Minimum = 2,
    Maximum = 3,
    Literal = 4,
    GreaterThan = 5,
    LessThan = 6,
    EqualTo = 7,
}

impl PacketType {
    pub const ALL: [PacketType; 8] = [
        PacketType::Sum,
        PacketType::Product,
        PacketType::Minimum,
        PacketType::Maximum,
        PacketType::Literal,
        PacketType::GreaterThan,
        PacketType::LessThan,
        PacketType::EqualTo,
    ];

    pub fn type_id(&self) -> u8 {
        *self as u8
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, PacketType::Literal)
    }

    /// Short lowercase name used in tree dumps and error messages
    pub fn name(&self) -> &'static str {
        match self {
            PacketType::Sum => "sum",
            PacketType::Product => "product",
            PacketType::Minimum => "minimum",
            PacketType::Maximum => "maximum",
            PacketType::Literal => "literal",
            PacketType::GreaterThan => "greater_than",
            PacketType::LessThan => "less_than",
            PacketType::EqualTo => "equal_to",
        }
    }
}

impl TryFrom<u8> for PacketType {
    type Error = PacketTypeError;

    fn try_from(type_id: u8) -> Result<Self, Self::Error> {
        PacketType::ALL
            .get(type_id as usize)
            .copied()
            .ok_or(PacketTypeError::InvalidTypeId(type_id))
    }
}

impl fmt::Display for PacketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How an operator delimits its children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthType {
    /// Length type bit 0: a 15-bit total of the children's bits follows
    TotalBits,
    /// Length type bit 1: an 11-bit count of children follows
    ChildCount,
}

impl LengthType {
    pub fn from_flag(flag: bool) -> Self {
        if flag {
            LengthType::ChildCount
        } else {
            LengthType::TotalBits
        }
    }

    /// Width of the length field that follows the length type bit
    pub fn field_bits(&self) -> u8 {
        match self {
            LengthType::TotalBits => TOTAL_LENGTH_BITS,
            LengthType::ChildCount => CHILD_COUNT_BITS,
        }
    }

    /// Bits of operator framing after the header: length type bit plus field
    pub fn framing_bits(&self) -> usize {
        LENGTH_TYPE_BITS + self.field_bits() as usize
    }
}

impl fmt::Display for LengthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthType::TotalBits => write!(f, "total-bits"),
            LengthType::ChildCount => write!(f, "child-count"),
        }
    }
}
