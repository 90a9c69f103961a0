//! Resource limits applied while parsing.
//!
//! The parser recurses once per nested object or array, so the nesting
//! depth is capped to keep adversarial input from exhausting the stack.

/// The default maximum nesting depth (e.g., `{"a" : [[[]]]}`).
pub const DEFAULT_MAX_DEPTH: usize = 128;
/// The default maximum size of an input document (10MB).
pub const MAX_JSON_SIZE_BYTES: usize = 10 * 1024 * 1024;

/// Limits checked by `parse_document_with_limits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of nested objects/arrays, the root object included.
    pub max_depth: usize,
    /// Maximum total input size in bytes.
    pub max_input_bytes: usize,
}

impl Limits {
    /// Limits with a custom nesting depth and the default size cap.
    pub const fn with_max_depth(max_depth: usize) -> Self {
        Limits {
            max_depth,
            max_input_bytes: MAX_JSON_SIZE_BYTES,
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_depth: DEFAULT_MAX_DEPTH,
            max_input_bytes: MAX_JSON_SIZE_BYTES,
        }
    }
}
