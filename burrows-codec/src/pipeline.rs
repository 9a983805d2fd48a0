//! Burrows-Wheeler followed by move-to-front.
//!
//! The compressed layout reuses the Burrows-Wheeler framing: a 32-bit
//! big-endian first-row index, then the last column after move-to-front
//! encoding (one index byte per symbol).

use burrows_core::error::Result;
use burrows_core::traits::ByteCodec;
use log::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::bwt::{self, check_frame_len, read_frame, write_frame};
use crate::config::SuffixSortConfig;
use crate::mtf;

/// Run the full forward pipeline with the default suffix sorter.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    compress_with(data, &SuffixSortConfig::DEFAULT)
}

/// Run the full forward pipeline with an explicit suffix sorter.
pub fn compress_with(data: &[u8], config: &SuffixSortConfig) -> Result<Vec<u8>> {
    check_frame_len(data.len())?;
    let block = bwt::transform_with(data, config);
    let indices = mtf::transform(&block.last);
    let output = write_frame(block.first, &indices)?;
    debug!(
        "pipeline compress: {} bytes -> {} bytes",
        data.len(),
        output.len()
    );
    Ok(output)
}

/// Invert [`compress`].
///
/// Empty input decodes to empty output.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Ok(Vec::new());
    }
    let (first, indices) = read_frame(data)?;
    let last = mtf::inverse_transform(&indices)?;
    let output = bwt::inverse_transform(&last, first)?;
    debug!(
        "pipeline decompress: {} bytes -> {} bytes",
        data.len(),
        output.len()
    );
    Ok(output)
}

/// Compress independent inputs in parallel (requires `parallel` feature).
///
/// Each input is transformed on its own; results are returned in input
/// order and are identical to calling [`compress`] on each.
#[cfg(feature = "parallel")]
pub fn compress_batch(inputs: &[&[u8]]) -> Vec<Result<Vec<u8>>> {
    inputs.par_iter().map(|data| compress(data)).collect()
}

/// Decompress independent inputs in parallel (requires `parallel` feature).
#[cfg(feature = "parallel")]
pub fn decompress_batch(inputs: &[&[u8]]) -> Vec<Result<Vec<u8>>> {
    inputs.par_iter().map(|data| decompress(data)).collect()
}

/// The combined pipeline as a [`ByteCodec`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Pipeline {
    config: SuffixSortConfig,
}

impl Pipeline {
    /// Create a pipeline with the given suffix sorter.
    pub fn new(config: SuffixSortConfig) -> Self {
        Self { config }
    }
}

impl ByteCodec for Pipeline {
    fn name(&self) -> &'static str {
        "pipeline"
    }

    fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        compress_with(input, &self.config)
    }

    fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        decompress(input)
    }
}
