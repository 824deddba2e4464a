// Loading transmission text from files

use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No transmission found in input")]
    Empty,
}

pub type Result<T> = std::result::Result<T, InputError>;

/// Pick the transmission out of input text: the first non-blank line, trimmed
pub fn parse_transmission(text: &str) -> Result<String> {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
        .ok_or(InputError::Empty)
}

/// Read a transmission from a text file
pub fn load_transmission(filename: impl AsRef<Path>) -> Result<String> {
    let text = fs::read_to_string(filename)?;
    parse_transmission(&text)
}
