// Hexadecimal transmission text to raw bytes
// Each digit expands to four bits, most significant bit first

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    #[error("Odd number of hex digits: {len}")]
    OddLength { len: usize },

    #[error("Invalid hex digit {digit:?} at index {index}")]
    InvalidDigit { digit: char, index: usize },
}

pub type Result<T> = std::result::Result<T, HexError>;

/// Convert a single hex digit (either case) to its nibble value
/// Example: '7' -> 0x7, 'e' -> 0xE, 'F' -> 0xF
pub fn hex_digit_to_nibble(digit: char, index: usize) -> Result<u8> {
    digit
        .to_digit(16)
        .map(|value| value as u8)
        .ok_or(HexError::InvalidDigit { digit, index })
}

/// Convert a hex string to bytes, two digits per byte
/// Example: "D2FE28" -> [0xD2, 0xFE, 0x28]
///
/// The whole string is rejected on an odd digit count or any non-hex
/// character; nothing is truncated.
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>> {
    let digits: Vec<char> = hex.chars().collect();
    if digits.len() % 2 != 0 {
        return Err(HexError::OddLength { len: digits.len() });
    }

    let mut bytes = Vec::with_capacity(digits.len() / 2);
    for (i, pair) in digits.chunks(2).enumerate() {
        let high = hex_digit_to_nibble(pair[0], i * 2)?;
        let low = hex_digit_to_nibble(pair[1], i * 2 + 1)?;
        bytes.push((high << 4) | low);
    }

    Ok(bytes)
}
