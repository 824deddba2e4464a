// Decoder configuration

/// Default nesting limit.
///
/// A message at depth d is written to JSON 2d+1 containers deep, and
/// serde_json reads back at most 127, so every tree decoded under this
/// limit also round-trips through `Message::from_json`. It also keeps the
/// recursive decoder and evaluator well inside a 2 MiB thread stack in
/// unoptimized builds.
pub const DEFAULT_MAX_DEPTH: usize = 63;

/// Decoder configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Deepest message nesting accepted before decoding fails; literals
    /// count as a level. The root message is at depth 0.
    pub max_depth: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DecoderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the nesting limit
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
