// Recursive message decoder over a bit source

use super::config::DecoderConfig;
use crate::bitwise::{BitSource, BitSourceError, HexError};
use crate::core::constants::*;
use crate::core::{LengthType, Message};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Malformed hex input: {0}")]
    Format(#[from] HexError),

    #[error("Truncated transmission: {0}")]
    Truncated(#[from] BitSourceError),

    #[error(
        "Operator at bit {offset} declares {declared} bits of sub-messages but they span {consumed}"
    )]
    LengthMismatch {
        offset: usize,
        declared: usize,
        consumed: usize,
    },

    #[error("Invalid type id {type_id} at bit {offset}")]
    InvalidTypeId { offset: usize, type_id: u64 },

    #[error("Literal at bit {offset} does not fit in 64 bits after {groups} groups")]
    LiteralOverflow { offset: usize, groups: usize },

    #[error("Message at bit {offset} is nested deeper than {limit} levels")]
    NestingTooDeep { offset: usize, limit: usize },
}

pub type Result<T> = std::result::Result<T, DecodeError>;

/// Decodes one message, with all its descendants, from a bit source.
///
/// On success the source is positioned immediately after the message and
/// the message's `encoded_bit_length` is exactly the number of bits read.
/// Any failure aborts the whole decode.
#[derive(Debug, Clone, Default)]
pub struct MessageDecoder {
    config: DecoderConfig,
}

impl MessageDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode the message starting at the source's cursor
    pub fn decode(&self, source: &mut BitSource) -> Result<Message> {
        self.decode_nested(source, 0)
    }

    fn decode_nested(&self, source: &mut BitSource, depth: usize) -> Result<Message> {
        let offset = source.bits_consumed();
        if depth > self.config.max_depth {
            return Err(DecodeError::NestingTooDeep {
                offset,
                limit: self.config.max_depth,
            });
        }

        let version = source.read_bits(VERSION_BITS)? as u8;
        let type_id = source.read_bits(TYPE_ID_BITS)?;
        if type_id > MAX_TYPE_ID as u64 {
            return Err(DecodeError::InvalidTypeId { offset, type_id });
        }

        match type_id as u8 {
            LITERAL_TYPE_ID => self.decode_literal(source, version, offset),
            type_id => self.decode_operator(source, version, type_id, offset, depth),
        }
    }

    fn decode_literal(&self, source: &mut BitSource, version: u8, offset: usize) -> Result<Message> {
        let mut value: u64 = 0;
        let mut groups = 0;

        loop {
            let more = source.read_flag()?;
            let nibble = source.read_bits(LITERAL_NIBBLE_BITS)?;
            groups += 1;

            if value > u64::MAX >> LITERAL_NIBBLE_BITS {
                return Err(DecodeError::LiteralOverflow { offset, groups });
            }
            value = (value << LITERAL_NIBBLE_BITS) | nibble;

            if !more {
                break;
            }
        }

        let encoded_bit_length = source.bits_consumed() - offset;
        debug_assert_eq!(encoded_bit_length, HEADER_BITS + groups * LITERAL_GROUP_BITS);
        tracing::trace!(
            "Literal at bit {}: value={} groups={} version={}",
            offset,
            value,
            groups,
            version
        );

        Ok(Message::Literal {
            version,
            offset,
            encoded_bit_length,
            groups,
            value,
        })
    }

    fn decode_operator(
        &self,
        source: &mut BitSource,
        version: u8,
        type_id: u8,
        offset: usize,
        depth: usize,
    ) -> Result<Message> {
        let length_type = LengthType::from_flag(source.read_flag()?);
        let field = source.read_bits(length_type.field_bits())? as usize;
        tracing::debug!(
            "Operator type {} at bit {}: {} framing, field={}",
            type_id,
            offset,
            length_type,
            field
        );

        let mut children = Vec::new();
        match length_type {
            LengthType::TotalBits => {
                let mut consumed = 0;
                while consumed < field {
                    let child = self.decode_nested(source, depth + 1)?;
                    consumed += child.encoded_bit_length();
                    children.push(child);
                }
                if consumed != field {
                    return Err(DecodeError::LengthMismatch {
                        offset,
                        declared: field,
                        consumed,
                    });
                }
            }
            LengthType::ChildCount => {
                children.reserve(field);
                for _ in 0..field {
                    children.push(self.decode_nested(source, depth + 1)?);
                }
            }
        }

        let encoded_bit_length = source.bits_consumed() - offset;
        tracing::debug!(
            "Operator type {} at bit {} closed: {} children, {} bits",
            type_id,
            offset,
            children.len(),
            encoded_bit_length
        );

        Ok(Message::Operator {
            version,
            type_id,
            offset,
            encoded_bit_length,
            length_type,
            children,
        })
    }
}
