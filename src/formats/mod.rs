// Transmission input and decoded tree output formats
pub mod input;
pub mod json;

pub use input::{load_transmission, parse_transmission, InputError};
pub use json::JsonError;
