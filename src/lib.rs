// TRANSMISSION-RS: decoder and evaluator for bit-packed message transmissions
// Copyright 2024 - Licensed under GPLv3

pub mod bitwise;
pub mod core;
pub mod decoder;
pub mod eval;
pub mod formats;

// Re-export commonly used types
pub use bitwise::{BitSource, BitSourceError, HexError};
pub use core::{LengthType, Message, MessageError, PacketType};
pub use decoder::{decode_hex, DecodeError, DecoderConfig, MessageDecoder, Transmission};
pub use eval::{evaluate, version_sum, EvalError};
pub use formats::{load_transmission, InputError, JsonError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_end_to_end() {
        let transmission = decode_hex("C0015000016115A2E0802F182340").unwrap();
        assert_eq!(transmission.version_sum(), 23);
        assert_eq!(version_sum(transmission.root()), 23);
        assert_eq!(evaluate(transmission.root()).unwrap(), 46);
    }
}
