// Core data model of decoded transmissions
pub mod constants;
pub mod message;
pub mod packet_type;

// Re-export commonly used types
pub use constants::*;
pub use message::{Message, MessageError};
pub use packet_type::{LengthType, PacketType, PacketTypeError};
