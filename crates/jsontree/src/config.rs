//! Runtime-configurable performance knobs.
//!
//! Both [`ParserConfig`] and [`SerializerConfig`] control only the initial
//! capacity of the scratch buffer each operation allocates; neither changes
//! parsing or serialization *behavior*. They exist so a caller with prior
//! knowledge of typical input sizes can avoid the buffer's early growth
//! spurts, the same tuning role the reference implementation's compile-time
//! `#define`s played.

/// The scratch capacity used when none is requested, in bytes.
pub const DEFAULT_SCRATCH_CAPACITY: usize = 256;

/// Controls the [`Parser`](crate::Parser)'s initial scratch buffer capacity.
///
/// # Examples
///
/// ```
/// use jsontree::{Parser, ParserConfig};
///
/// let parser = Parser::with_config(ParserConfig {
///     initial_scratch_capacity: 4096,
/// });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Bytes reserved up front for string-escape decoding scratch space.
    pub initial_scratch_capacity: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            initial_scratch_capacity: DEFAULT_SCRATCH_CAPACITY,
        }
    }
}

/// Controls the [`Serializer`](crate::Serializer)'s initial output-buffer
/// capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializerConfig {
    /// Bytes reserved up front for the serialized output.
    pub initial_scratch_capacity: usize,
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            initial_scratch_capacity: DEFAULT_SCRATCH_CAPACITY,
        }
    }
}
