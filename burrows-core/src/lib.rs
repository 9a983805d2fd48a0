//! # Burrows Core
//!
//! Core components shared by the burrows transform crates.
//!
//! - [`framing`]: MSB-first frame reader/writer (32-bit header, 8-bit payload)
//! - [`traits`]: the [`ByteCodec`] trait implemented by every stage
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ CLI                                                     │
//! │     burrows bwt | mtf | pipeline | index | stats       │
//! ├─────────────────────────────────────────────────────────┤
//! │ Codec                                                   │
//! │     CircularSuffixIndex, Burrows-Wheeler, Move-to-Front │
//! ├─────────────────────────────────────────────────────────┤
//! │ Core (this crate)                                       │
//! │     FrameReader/FrameWriter, ByteCodec, BurrowsError    │
//! └─────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod framing;
pub mod traits;

pub use error::{BurrowsError, Result};
pub use framing::{FrameReader, FrameWriter};
pub use traits::{ByteCodec, Direction};
