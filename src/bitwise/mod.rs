// Bit-level input handling for hex-encoded transmissions

pub mod bit_source;
pub mod hex;
pub mod parser;

pub use bit_source::{BitSource, BitSourceError, MAX_READ_WIDTH};
pub use hex::{hex_to_bytes, HexError};
pub use parser::{take_bits, take_flag};
