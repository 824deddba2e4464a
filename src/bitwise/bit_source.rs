// Forward-only bit cursor over a transmission

use super::hex::{hex_to_bytes, HexError};
use super::parser::{take_bits, take_flag};
use std::fmt;
use thiserror::Error;

/// Widest single read supported by `BitSource::read_bits`
pub const MAX_READ_WIDTH: u8 = 64;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BitSourceError {
    #[error("Buffer underrun at bit {offset}: requested {requested} bits, {available} available")]
    BufferUnderrun {
        requested: usize,
        available: usize,
        offset: usize,
    },

    #[error("Invalid read width: {0} bits (maximum 64)")]
    InvalidWidth(u8),
}

pub type Result<T> = std::result::Result<T, BitSourceError>;

/// Sequential reader of fixed-width unsigned integers from a bit stream.
///
/// The cursor only moves forward. Bits left over after the caller is done
/// are not inspected; padding is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitSource {
    data: Vec<u8>,
    pos: usize,
}

impl BitSource {
    /// Create a bit source over raw bytes
    pub fn new(data: Vec<u8>) -> Self {
        Self { data, pos: 0 }
    }

    /// Create a bit source from hex text, four bits per digit
    pub fn from_hex(hex: &str) -> std::result::Result<Self, HexError> {
        Ok(Self::new(hex_to_bytes(hex)?))
    }

    /// Read the next `width` bits as a big-endian unsigned integer
    pub fn read_bits(&mut self, width: u8) -> Result<u64> {
        if width > MAX_READ_WIDTH {
            return Err(BitSourceError::InvalidWidth(width));
        }
        let width = width as usize;
        self.ensure_available(width)?;

        let (_, value) = take_bits(width)(self.input()).map_err(|_| self.underrun(width))?;
        self.pos += width;
        Ok(value)
    }

    /// Read a single bit as a flag
    pub fn read_flag(&mut self) -> Result<bool> {
        self.ensure_available(1)?;

        let (_, flag) = take_flag(self.input()).map_err(|_| self.underrun(1))?;
        self.pos += 1;
        Ok(flag)
    }

    /// Number of bits consumed so far
    pub fn bits_consumed(&self) -> usize {
        self.pos
    }

    /// Number of bits not yet read
    pub fn bits_remaining(&self) -> usize {
        self.len_bits() - self.pos
    }

    /// Total length of the stream in bits
    pub fn len_bits(&self) -> usize {
        self.data.len() * 8
    }

    /// Check if every bit has been read
    pub fn is_exhausted(&self) -> bool {
        self.bits_remaining() == 0
    }

    fn input(&self) -> (&[u8], usize) {
        (&self.data[self.pos / 8..], self.pos % 8)
    }

    fn ensure_available(&self, width: usize) -> Result<()> {
        if width > self.bits_remaining() {
            return Err(self.underrun(width));
        }
        Ok(())
    }

    fn underrun(&self, requested: usize) -> BitSourceError {
        BitSourceError::BufferUnderrun {
            requested,
            available: self.bits_remaining(),
            offset: self.pos,
        }
    }
}

impl From<Vec<u8>> for BitSource {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl fmt::Display for BitSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitSource({}/{} bits)", self.pos, self.len_bits())
    }
}
