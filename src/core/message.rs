// Decoded message tree: literal values and operators over child messages

use super::constants::{HEADER_BITS, LITERAL_GROUP_BITS, LITERAL_TYPE_ID, MAX_VERSION};
use super::packet_type::{LengthType, PacketType};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MessageError {
    #[error("Version {version} at bit {offset} does not fit in 3 bits")]
    InvalidVersion { version: u8, offset: usize },

    #[error("Type id {type_id} at bit {offset} is not an operator type")]
    InvalidOperatorType { type_id: u8, offset: usize },
}

pub type Result<T> = std::result::Result<T, MessageError>;

/// One decoded message and, for operators, everything nested below it.
///
/// `offset` is the bit position in the source where the message header
/// started; `encoded_bit_length` covers the header, the payload and every
/// descendant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Message {
    Literal {
        version: u8,
        offset: usize,
        encoded_bit_length: usize,
        /// Number of 5-bit payload groups
        groups: usize,
        value: u64,
    },
    Operator {
        version: u8,
        type_id: u8,
        offset: usize,
        encoded_bit_length: usize,
        length_type: LengthType,
        children: Vec<Message>,
    },
}

impl Message {
    /// Build a literal with the shortest group encoding of `value`
    pub fn literal(version: u8, value: u64) -> Result<Self> {
        check_version(version, 0)?;
        let significant_bits = (u64::BITS - value.leading_zeros()) as usize;
        let groups = significant_bits.div_ceil(4).max(1);
        Ok(Message::Literal {
            version,
            offset: 0,
            encoded_bit_length: HEADER_BITS + groups * LITERAL_GROUP_BITS,
            groups,
            value,
        })
    }

    /// Build a child-count framed operator over `children`.
    /// `type_id` must name an operator: 0..=7 except the literal id 4.
    pub fn operator(version: u8, type_id: u8, children: Vec<Message>) -> Result<Self> {
        check_version(version, 0)?;
        check_operator_type(type_id, 0)?;
        let length_type = LengthType::ChildCount;
        let encoded_bit_length = HEADER_BITS
            + length_type.framing_bits()
            + children.iter().map(Message::encoded_bit_length).sum::<usize>();
        Ok(Message::Operator {
            version,
            type_id,
            offset: 0,
            encoded_bit_length,
            length_type,
            children,
        })
    }

    /// Check every message in the tree: versions fit in 3 bits and operators
    /// carry an operator type id
    pub fn validate(&self) -> Result<()> {
        check_version(self.version(), self.offset())?;
        if let Message::Operator {
            type_id,
            offset,
            children,
            ..
        } = self
        {
            check_operator_type(*type_id, *offset)?;
            for child in children {
                child.validate()?;
            }
        }
        Ok(())
    }

    pub fn version(&self) -> u8 {
        match self {
            Message::Literal { version, .. } | Message::Operator { version, .. } => *version,
        }
    }

    pub fn type_id(&self) -> u8 {
        match self {
            Message::Literal { .. } => LITERAL_TYPE_ID,
            Message::Operator { type_id, .. } => *type_id,
        }
    }

    /// Named type, or None if the type id is outside 0..=7
    pub fn packet_type(&self) -> Option<PacketType> {
        PacketType::try_from(self.type_id()).ok()
    }

    pub fn offset(&self) -> usize {
        match self {
            Message::Literal { offset, .. } | Message::Operator { offset, .. } => *offset,
        }
    }

    pub fn encoded_bit_length(&self) -> usize {
        match self {
            Message::Literal {
                encoded_bit_length, ..
            }
            | Message::Operator {
                encoded_bit_length, ..
            } => *encoded_bit_length,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Message::Literal { .. })
    }

    pub fn literal_value(&self) -> Option<u64> {
        match self {
            Message::Literal { value, .. } => Some(*value),
            Message::Operator { .. } => None,
        }
    }

    /// Child messages in read order; empty for literals
    pub fn children(&self) -> &[Message] {
        match self {
            Message::Literal { .. } => &[],
            Message::Operator { children, .. } => children,
        }
    }

    /// Number of messages in this subtree, including self
    pub fn count(&self) -> usize {
        1 + self.children().iter().map(Message::count).sum::<usize>()
    }

    /// Levels in this subtree; a lone literal has depth 1
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(Message::depth)
            .max()
            .unwrap_or(0)
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let pad = "  ".repeat(indent);
        match self {
            Message::Literal {
                version,
                offset,
                encoded_bit_length,
                value,
                ..
            } => writeln!(
                f,
                "{}literal {} (v{}, {} bits @{})",
                pad, value, version, encoded_bit_length, offset
            ),
            Message::Operator {
                version,
                type_id,
                offset,
                encoded_bit_length,
                length_type,
                children,
            } => {
                let name = PacketType::try_from(*type_id)
                    .map(|t| t.name().to_string())
                    .unwrap_or_else(|_| format!("type{}", type_id));
                writeln!(
                    f,
                    "{}{} [{}, {} children] (v{}, {} bits @{})",
                    pad,
                    name,
                    length_type,
                    children.len(),
                    version,
                    encoded_bit_length,
                    offset
                )?;
                for child in children {
                    child.fmt_indented(f, indent + 1)?;
                }
                Ok(())
            }
        }
    }
}

fn check_version(version: u8, offset: usize) -> Result<()> {
    if version > MAX_VERSION {
        return Err(MessageError::InvalidVersion { version, offset });
    }
    Ok(())
}

fn check_operator_type(type_id: u8, offset: usize) -> Result<()> {
    match PacketType::try_from(type_id) {
        Ok(packet_type) if !packet_type.is_literal() => Ok(()),
        _ => Err(MessageError::InvalidOperatorType { type_id, offset }),
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}
