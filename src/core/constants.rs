// Field widths and fixed codes of the transmission format

/// Width of the version field at the start of every message
pub const VERSION_BITS: u8 = 3;

/// Width of the type id field following the version
pub const TYPE_ID_BITS: u8 = 3;

/// Highest version the 3-bit field can carry
pub const MAX_VERSION: u8 = (1 << VERSION_BITS) - 1;

/// Version plus type id
pub const HEADER_BITS: usize = (VERSION_BITS + TYPE_ID_BITS) as usize;

/// Highest type id the 3-bit field can carry
pub const MAX_TYPE_ID: u8 = (1 << TYPE_ID_BITS) - 1;

/// Type id reserved for literal values; every other id is an operator
pub const LITERAL_TYPE_ID: u8 = 4;

/// Literal payload group: one continuation flag plus one nibble
pub const LITERAL_GROUP_BITS: usize = 5;
pub const LITERAL_NIBBLE_BITS: u8 = 4;

/// Operator framing: one length type bit, then either a total sub-message
/// length or a child count
pub const LENGTH_TYPE_BITS: usize = 1;
pub const TOTAL_LENGTH_BITS: u8 = 15;
pub const CHILD_COUNT_BITS: u8 = 11;
