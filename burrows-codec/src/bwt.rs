//! Burrows-Wheeler Transform.
//!
//! The forward transform sorts every cyclic rotation of the block and emits
//! the last column of the sorted matrix together with the row holding the
//! unrotated block. The inverse rebuilds the block from that pair with a
//! stable counting sort, no comparisons needed.
//!
//! # Framing
//!
//! [`encode_framed`] and [`decode_framed`] use a 32-bit big-endian first-row
//! index followed by the last column, one byte per symbol. An empty block is
//! the four bytes `00 00 00 00`.

use burrows_core::error::{BurrowsError, Result};
use burrows_core::framing::{FrameReader, FrameWriter};
use burrows_core::traits::ByteCodec;
use log::debug;

use crate::config::SuffixSortConfig;
use crate::suffix::CircularSuffixIndex;

/// Size of the byte alphabet.
const RADIX: usize = 256;

/// Output of the forward transform.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BwtBlock {
    /// Sorted row holding the unrotated block.
    pub first: usize,
    /// Last column of the sorted rotation matrix.
    pub last: Vec<u8>,
}

impl BwtBlock {
    /// Create a block from its parts.
    pub fn new(first: usize, last: Vec<u8>) -> Self {
        Self { first, last }
    }

    /// Length of the block.
    pub fn len(&self) -> usize {
        self.last.len()
    }

    /// Whether the block is empty.
    pub fn is_empty(&self) -> bool {
        self.last.is_empty()
    }
}

/// Perform the Burrows-Wheeler Transform with the default suffix sorter.
pub fn transform(data: &[u8]) -> BwtBlock {
    transform_with(data, &SuffixSortConfig::DEFAULT)
}

/// Perform the Burrows-Wheeler Transform with an explicit suffix sorter.
pub fn transform_with(data: &[u8], config: &SuffixSortConfig) -> BwtBlock {
    if data.is_empty() {
        return BwtBlock::default();
    }

    let n = data.len();
    let index = CircularSuffixIndex::with_config(data, config);
    let order = index.as_slice();

    let first = order.iter().position(|&i| i == 0).unwrap_or_default();
    let last: Vec<u8> = order.iter().map(|&i| data[(i + n - 1) % n]).collect();

    debug!("bwt transform: {} bytes, first row {}", n, first);
    BwtBlock { first, last }
}

/// Perform the inverse Burrows-Wheeler Transform.
///
/// # Errors
///
/// Returns [`BurrowsError::InvalidFirstIndex`] when `last` is non-empty and
/// `first >= last.len()`.
pub fn inverse_transform(last: &[u8], first: usize) -> Result<Vec<u8>> {
    if last.is_empty() {
        return Ok(Vec::new());
    }

    let n = last.len();
    if first >= n {
        return Err(BurrowsError::invalid_first_index(first, n));
    }

    let next = successors(last);

    // `next[first]` is the row starting one symbol after the unrotated block,
    // whose last symbol is the block's first byte.
    let mut result = Vec::with_capacity(n);
    let mut idx = next[first];
    for _ in 0..n {
        result.push(last[idx]);
        idx = next[idx];
    }

    debug!("bwt inverse: {} bytes from first row {}", n, first);
    Ok(result)
}

/// Inverse transform of a [`BwtBlock`].
pub fn inverse_block(block: &BwtBlock) -> Result<Vec<u8>> {
    inverse_transform(&block.last, block.first)
}

/// Build the successor permutation of a last column.
///
/// Sorting `last` stably gives the first column; `next[p]` is the row whose
/// last symbol is the occurrence that lands at first-column position `p`.
/// Following `next` from any row walks the rotations in text order.
pub fn successors(last: &[u8]) -> Vec<usize> {
    let mut counts = [0usize; RADIX];
    for &byte in last {
        counts[byte as usize] += 1;
    }

    // starts[c] = number of symbols strictly less than c
    let mut starts = [0usize; RADIX];
    let mut total = 0;
    for (start, &count) in starts.iter_mut().zip(counts.iter()) {
        *start = total;
        total += count;
    }

    let mut next = vec![0usize; last.len()];
    for (i, &byte) in last.iter().enumerate() {
        let slot = &mut starts[byte as usize];
        next[*slot] = i;
        *slot += 1;
    }
    next
}

/// Forward transform written in the 32-bit first-row framing.
///
/// # Errors
///
/// Returns [`BurrowsError::InputTooLarge`] if the block length does not fit
/// the 32-bit header.
pub fn encode_framed(data: &[u8]) -> Result<Vec<u8>> {
    encode_framed_with(data, &SuffixSortConfig::DEFAULT)
}

/// Framed forward transform with an explicit suffix sorter.
pub fn encode_framed_with(data: &[u8], config: &SuffixSortConfig) -> Result<Vec<u8>> {
    check_frame_len(data.len())?;
    let block = transform_with(data, config);
    write_frame(block.first, &block.last)
}

/// Inverse of [`encode_framed`].
///
/// Empty input decodes to empty output. Input shorter than the 4-byte header
/// is an error.
pub fn decode_framed(data: &[u8]) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Ok(Vec::new());
    }
    let (first, last) = read_frame(data)?;
    inverse_transform(&last, first)
}

/// Largest block the 32-bit header can address.
pub const MAX_FRAMED_LEN: usize = u32::MAX as usize;

pub(crate) fn check_frame_len(len: usize) -> Result<()> {
    if len > MAX_FRAMED_LEN {
        return Err(BurrowsError::input_too_large(len, MAX_FRAMED_LEN));
    }
    Ok(())
}

pub(crate) fn write_frame(first: usize, payload: &[u8]) -> Result<Vec<u8>> {
    let header = u32::try_from(first)
        .map_err(|_| BurrowsError::input_too_large(first, MAX_FRAMED_LEN))?;
    let mut writer = FrameWriter::with_capacity(4 + payload.len());
    writer.write_u32(header)?;
    writer.write_bytes(payload)?;
    writer.into_vec()
}

pub(crate) fn read_frame(data: &[u8]) -> Result<(usize, Vec<u8>)> {
    let mut reader = FrameReader::new(data);
    let first = reader.read_u32()? as usize;
    let payload = reader.read_remaining()?;
    Ok((first, payload))
}

/// The framed Burrows-Wheeler stage as a [`ByteCodec`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BurrowsWheeler {
    config: SuffixSortConfig,
}

impl BurrowsWheeler {
    /// Create the stage with the given suffix sorter.
    pub fn new(config: SuffixSortConfig) -> Self {
        Self { config }
    }
}

impl ByteCodec for BurrowsWheeler {
    fn name(&self) -> &'static str {
        "bwt"
    }

    fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        encode_framed_with(input, &self.config)
    }

    fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        decode_framed(input)
    }
}
