// A fully decoded transmission: the root message plus trailing padding

use super::config::DecoderConfig;
use super::decode::{MessageDecoder, Result};
use crate::bitwise::{BitSource, MAX_READ_WIDTH};
use crate::core::Message;
use crate::eval::{self, EvalError};

/// Decoded transmission.
///
/// Bits after the root message are padding. They are counted but never
/// interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transmission {
    root: Message,
    total_bits: usize,
    padding_is_zero: bool,
}

impl Transmission {
    /// Decode a hex transmission with the default configuration
    pub fn from_hex(hex: &str) -> Result<Self> {
        Self::from_hex_with_config(hex, DecoderConfig::default())
    }

    pub fn from_hex_with_config(hex: &str, config: DecoderConfig) -> Result<Self> {
        let mut source = BitSource::from_hex(hex)?;
        Self::decode(&mut source, &MessageDecoder::with_config(config))
    }

    /// Decode the root message and skip over whatever follows it
    pub fn decode(source: &mut BitSource, decoder: &MessageDecoder) -> Result<Self> {
        let root = decoder.decode(source)?;

        let mut padding_is_zero = true;
        while !source.is_exhausted() {
            let width = source.bits_remaining().min(MAX_READ_WIDTH as usize) as u8;
            padding_is_zero &= source.read_bits(width)? == 0;
        }
        let total_bits = source.bits_consumed();

        if !padding_is_zero {
            tracing::debug!(
                "Non-zero padding after root message ({} of {} bits)",
                total_bits - root.encoded_bit_length(),
                total_bits
            );
        }

        Ok(Self {
            root,
            total_bits,
            padding_is_zero,
        })
    }

    pub fn root(&self) -> &Message {
        &self.root
    }

    pub fn into_root(self) -> Message {
        self.root
    }

    /// Length of the whole input in bits
    pub fn total_bits(&self) -> usize {
        self.total_bits
    }

    /// Bits following the root message
    pub fn padding_bits(&self) -> usize {
        self.total_bits - self.root.encoded_bit_length() - self.root.offset()
    }

    pub fn padding_is_zero(&self) -> bool {
        self.padding_is_zero
    }

    pub fn version_sum(&self) -> u64 {
        eval::version_sum(&self.root)
    }

    pub fn evaluate(&self) -> std::result::Result<u64, EvalError> {
        eval::evaluate(&self.root)
    }
}

/// Decode a hex transmission with the default configuration
pub fn decode_hex(hex: &str) -> Result<Transmission> {
    Transmission::from_hex(hex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::DecodeError;

    #[test]
    fn test_padding_accounting() {
        let transmission = decode_hex("D2FE28").unwrap();
        assert_eq!(transmission.total_bits(), 24);
        assert_eq!(transmission.root().encoded_bit_length(), 21);
        assert_eq!(transmission.padding_bits(), 3);
        assert!(transmission.padding_is_zero());

        let transmission = decode_hex("38006F45291200").unwrap();
        assert_eq!(transmission.padding_bits(), 56 - 49);
    }

    #[test]
    fn test_non_zero_padding_is_tolerated() {
        // D2FE28 with the last three padding bits set
        let transmission = decode_hex("D2FE2F").unwrap();
        assert_eq!(transmission.root().literal_value(), Some(2021));
        assert!(!transmission.padding_is_zero());
    }

    #[test]
    fn test_outputs() {
        let transmission = decode_hex("A0016C880162017C3686B18A3D4780").unwrap();
        assert_eq!(transmission.version_sum(), 31);

        let transmission = decode_hex("9C0141080250320F1802104A08").unwrap();
        assert_eq!(transmission.evaluate().unwrap(), 1);
    }

    #[test]
    fn test_lowercase_input() {
        let upper = decode_hex("C200B40A82").unwrap();
        let lower = decode_hex("c200b40a82").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(lower.evaluate().unwrap(), 3);
    }

    #[test]
    fn test_config_is_applied() {
        let config = DecoderConfig::new().with_max_depth(0);
        assert!(matches!(
            Transmission::from_hex_with_config("EE00D40C823060", config),
            Err(DecodeError::NestingTooDeep { limit: 0, .. })
        ));
    }

    #[test]
    fn test_empty_input_underruns() {
        assert!(matches!(decode_hex(""), Err(DecodeError::Truncated(_))));
    }

    #[test]
    fn test_long_padding() {
        // Literal followed by more than 64 bits of zero padding
        let hex = format!("D2FE28{}", "0".repeat(40));
        let transmission = decode_hex(&hex).unwrap();
        assert_eq!(transmission.padding_bits(), 3 + 160);
        assert!(transmission.padding_is_zero());
    }
}
