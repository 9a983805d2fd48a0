//! Burrows-Wheeler and move-to-front transforms.
//!
//! This crate provides the reversible preprocessing stage of a block-sorting
//! compressor, the part that runs before an entropy coder:
//!
//! 1. Circular suffix sorting - orders the cyclic rotations of a block
//! 2. Burrows-Wheeler Transform (BWT) - groups bytes with similar contexts
//! 3. Move-to-Front Transform (MTF) - turns local clusters into small indices
//!
//! ## Example
//!
//! ```rust
//! use burrows_codec::{bwt, mtf, pipeline};
//!
//! let block = bwt::transform(b"ABRACADABRA!");
//! assert_eq!(block.first, 3);
//! assert_eq!(block.last, b"ARD!RCAAAABB");
//!
//! let indices = mtf::transform(&block.last);
//! let last = mtf::inverse_transform(&indices).unwrap();
//! assert_eq!(bwt::inverse_transform(&last, block.first).unwrap(), b"ABRACADABRA!");
//!
//! let packed = pipeline::compress(b"banana").unwrap();
//! assert_eq!(pipeline::decompress(&packed).unwrap(), b"banana");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

/// Burrows-Wheeler Transform implementation.
pub mod bwt;
pub mod config;
pub mod mtf;
pub mod pipeline;
pub mod suffix;

pub use bwt::{BurrowsWheeler, BwtBlock};
pub use config::{SuffixAlgorithm, SuffixSortConfig};
pub use mtf::MoveToFront;
pub use pipeline::{Pipeline, compress, decompress};
pub use suffix::CircularSuffixIndex;

#[cfg(feature = "parallel")]
pub use pipeline::{compress_batch, decompress_batch};
