// Decoding of hex transmissions into message trees

pub mod config;
pub mod decode;
pub mod transmission;

pub use config::{DecoderConfig, DEFAULT_MAX_DEPTH};
pub use decode::{DecodeError, MessageDecoder};
pub use transmission::{decode_hex, Transmission};
