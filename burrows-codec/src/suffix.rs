//! Circular suffix index.
//!
//! Sorts the `n` cyclic rotations of a byte block and records, for each
//! sorted row, the offset in the block where that rotation starts. Rotations
//! whose contents are identical (only possible for periodic blocks such as
//! `"AAAA"` or `"ABAB"`) are ordered by ascending offset, so the result is a
//! strict total order and every algorithm yields the same permutation.

use std::cmp::Ordering;

use burrows_core::error::{BurrowsError, Result};
use log::trace;

use crate::config::{SuffixAlgorithm, SuffixSortConfig};

/// Sorted cyclic rotations of a byte block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircularSuffixIndex {
    order: Vec<usize>,
}

impl CircularSuffixIndex {
    /// Build the index with the default configuration.
    pub fn new(data: &[u8]) -> Self {
        Self::with_config(data, &SuffixSortConfig::DEFAULT)
    }

    /// Build the index with an explicit configuration.
    pub fn with_config(data: &[u8], config: &SuffixSortConfig) -> Self {
        let order = match config.resolve(data.len()) {
            SuffixAlgorithm::Naive => sort_naive(data),
            // `resolve` never returns `Auto`.
            SuffixAlgorithm::PrefixDoubling | SuffixAlgorithm::Auto => sort_prefix_doubling(data),
        };
        Self { order }
    }

    /// Number of rotations (the block length).
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the block was empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Starting offset of the rotation in sorted row `row`.
    pub fn index(&self, row: usize) -> Result<usize> {
        self.order
            .get(row)
            .copied()
            .ok_or_else(|| BurrowsError::row_out_of_range(row, self.order.len()))
    }

    /// Sorted row holding the unrotated block, or `None` for an empty block.
    pub fn first_row(&self) -> Option<usize> {
        self.order.iter().position(|&offset| offset == 0)
    }

    /// The full permutation.
    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    /// Consume the index and return the permutation.
    pub fn into_vec(self) -> Vec<usize> {
        self.order
    }
}

/// Build the sorted rotation permutation with the default configuration.
pub fn build(data: &[u8]) -> Vec<usize> {
    CircularSuffixIndex::new(data).into_vec()
}

/// Compare the rotations of `data` starting at offsets `a` and `b`.
///
/// Content-identical rotations compare by offset.
pub fn compare_rotations(data: &[u8], a: usize, b: usize) -> Ordering {
    let n = data.len();
    if a == b {
        return Ordering::Equal;
    }
    for k in 0..n {
        let byte_a = data[(a + k) % n];
        let byte_b = data[(b + k) % n];
        match byte_a.cmp(&byte_b) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    a.cmp(&b)
}

fn sort_naive(data: &[u8]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..data.len()).collect();
    order.sort_by(|&a, &b| compare_rotations(data, a, b));
    order
}

/// Prefix doubling over cyclic rotations.
///
/// `class[i]` is the rank of the length-`k` prefix of rotation `i` among all
/// such prefixes. Each round sorts by the pair `(class[i], class[i + k])`,
/// which ranks the length-`2k` prefixes. Once `k >= n` the classes describe
/// whole rotations; any remaining ties are between identical rotations.
fn sort_prefix_doubling(data: &[u8]) -> Vec<usize> {
    let n = data.len();
    if n == 0 {
        return Vec::new();
    }

    let mut counts = vec![0usize; n.max(256)];
    let mut order = vec![0usize; n];

    // Round zero: stable counting sort on the first byte.
    for &byte in data {
        counts[byte as usize] += 1;
    }
    exclusive_prefix_sums(&mut counts[..256]);
    for (i, &byte) in data.iter().enumerate() {
        let slot = &mut counts[byte as usize];
        order[*slot] = i;
        *slot += 1;
    }

    let mut class = vec![0usize; n];
    let mut classes = 1;
    for i in 1..n {
        if data[order[i]] != data[order[i - 1]] {
            classes += 1;
        }
        class[order[i]] = classes - 1;
    }

    let mut shifted = vec![0usize; n];
    let mut next_class = vec![0usize; n];
    let mut k = 1;

    while k < n && classes < n {
        // Rotations ordered by their second half.
        for (slot, &start) in shifted.iter_mut().zip(order.iter()) {
            *slot = (start + n - k) % n;
        }

        // Stable counting sort on the first half.
        counts[..classes].fill(0);
        for &start in &shifted {
            counts[class[start]] += 1;
        }
        exclusive_prefix_sums(&mut counts[..classes]);
        for &start in &shifted {
            let slot = &mut counts[class[start]];
            order[*slot] = start;
            *slot += 1;
        }

        next_class[order[0]] = 0;
        classes = 1;
        for i in 1..n {
            let (cur, prev) = (order[i], order[i - 1]);
            if class[cur] != class[prev] || class[(cur + k) % n] != class[(prev + k) % n] {
                classes += 1;
            }
            next_class[cur] = classes - 1;
        }
        std::mem::swap(&mut class, &mut next_class);

        trace!("prefix doubling: prefix length {} -> {} classes", k * 2, classes);
        k *= 2;
    }

    if classes < n {
        // Identical rotations remain; order them by offset.
        counts[..classes].fill(0);
        for &c in &class {
            counts[c] += 1;
        }
        exclusive_prefix_sums(&mut counts[..classes]);
        for (offset, &c) in class.iter().enumerate() {
            order[counts[c]] = offset;
            counts[c] += 1;
        }
    }

    order
}

/// Turn per-key counts into starting positions.
fn exclusive_prefix_sums(counts: &mut [usize]) {
    let mut total = 0;
    for count in counts.iter_mut() {
        let c = *count;
        *count = total;
        total += c;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotations_sorted_by_content(data: &[u8]) -> Vec<usize> {
        let n = data.len();
        let mut rows: Vec<(Vec<u8>, usize)> = (0..n)
            .map(|i| {
                let rotation = data[i..].iter().chain(&data[..i]).copied().collect();
                (rotation, i)
            })
            .collect();
        rows.sort();
        rows.into_iter().map(|(_, i)| i).collect()
    }

    #[test]
    fn test_empty() {
        let index = CircularSuffixIndex::new(b"");
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert_eq!(index.first_row(), None);
        assert!(build(b"").is_empty());
        assert!(sort_prefix_doubling(b"").is_empty());
    }

    #[test]
    fn test_single() {
        assert_eq!(build(b"x"), vec![0]);
        assert_eq!(sort_prefix_doubling(b"x"), vec![0]);
    }

    #[test]
    fn test_abracadabra() {
        // Reference order of "ABRACADABRA!" rotations.
        let expected = vec![11, 10, 7, 0, 3, 5, 8, 1, 4, 6, 9, 2];
        assert_eq!(sort_naive(b"ABRACADABRA!"), expected);
        assert_eq!(sort_prefix_doubling(b"ABRACADABRA!"), expected);
    }

    #[test]
    fn test_all_identical_ties_by_offset() {
        assert_eq!(sort_naive(b"AAAA"), vec![0, 1, 2, 3]);
        assert_eq!(sort_prefix_doubling(b"AAAA"), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_periodic_ties_by_offset() {
        // Rotations 0, 2 and 4 are all "ABABAB"; 1, 3, 5 are "BABABA".
        assert_eq!(sort_naive(b"ABABAB"), vec![0, 2, 4, 1, 3, 5]);
        assert_eq!(sort_prefix_doubling(b"ABABAB"), vec![0, 2, 4, 1, 3, 5]);
    }

    #[test]
    fn test_matches_content_sort() {
        let cases: [&[u8]; 5] = [
            b"banana",
            b"mississippi",
            b"the quick brown fox jumps over the lazy dog",
            b"\x00\xff\x00\xff\x01",
            b"abcabcabd",
        ];
        for data in cases {
            let expected = rotations_sorted_by_content(data);
            assert_eq!(sort_naive(data), expected, "naive: {:?}", data);
            assert_eq!(sort_prefix_doubling(data), expected, "doubling: {:?}", data);
        }
    }

    #[test]
    fn test_full_alphabet() {
        let data: Vec<u8> = (0..=255).rev().chain(0..=255).collect();
        assert_eq!(sort_prefix_doubling(&data), sort_naive(&data));
    }

    #[test]
    fn test_index_accessors() {
        let index = CircularSuffixIndex::new(b"ABRACADABRA!");
        assert_eq!(index.len(), 12);
        assert_eq!(index.index(0).unwrap(), 11);
        assert_eq!(index.first_row(), Some(3));
        assert!(matches!(
            index.index(12),
            Err(BurrowsError::RowOutOfRange { row: 12, len: 12 })
        ));
    }

    #[test]
    fn test_compare_rotations() {
        let data = b"ABAB";
        assert_eq!(compare_rotations(data, 0, 0), Ordering::Equal);
        assert_eq!(compare_rotations(data, 0, 1), Ordering::Less);
        assert_eq!(compare_rotations(data, 0, 2), Ordering::Less);
        assert_eq!(compare_rotations(data, 2, 0), Ordering::Greater);
    }

    #[test]
    fn test_config_selects_same_result() {
        let data = b"she sells sea shells by the sea shore";
        let naive = CircularSuffixIndex::with_config(data, &SuffixSortConfig::NAIVE);
        let doubling = CircularSuffixIndex::with_config(data, &SuffixSortConfig::DOUBLING);
        assert_eq!(naive, doubling);
    }
}
