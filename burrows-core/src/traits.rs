//! Core traits for byte-stream transforms.
//!
//! Each stage of the pipeline (Burrows-Wheeler, move-to-front, and their
//! composition) consumes a complete byte buffer and produces a new one. The
//! [`ByteCodec`] trait is the common surface so callers such as the CLI can
//! select a stage at runtime.

use crate::error::Result;

/// Direction a [`ByteCodec`] is run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Apply the forward transform.
    #[default]
    Encode,
    /// Apply the inverse transform.
    Decode,
}

/// A reversible whole-buffer transform.
///
/// Implementations must satisfy `decode(encode(x)) == x` for every input
/// they accept. Neither method keeps state between calls.
pub trait ByteCodec {
    /// Short human-readable name of the stage.
    fn name(&self) -> &'static str;

    /// Apply the forward transform.
    fn encode(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Apply the inverse transform.
    fn decode(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Run the codec in the given direction.
    fn apply(&self, direction: Direction, input: &[u8]) -> Result<Vec<u8>> {
        match direction {
            Direction::Encode => self.encode(input),
            Direction::Decode => self.decode(input),
        }
    }
}
