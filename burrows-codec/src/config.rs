//! Suffix sorting configuration.

/// Algorithm used to sort the cyclic rotations of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuffixAlgorithm {
    /// Comparison sort for short inputs, prefix doubling otherwise.
    #[default]
    Auto,
    /// Rank-refinement over doubling prefix lengths, O(n log n).
    PrefixDoubling,
    /// Comparison sort with a cyclic comparator, O(n² log n) worst case.
    Naive,
}

/// Configuration for building a circular suffix index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixSortConfig {
    /// Which sorting algorithm to use.
    pub algorithm: SuffixAlgorithm,
    /// Inputs shorter than this are sorted naively when `algorithm` is `Auto`.
    pub naive_threshold: usize,
}

impl SuffixSortConfig {
    /// Default configuration: naive below 16 bytes, prefix doubling above.
    pub const DEFAULT: Self = Self {
        algorithm: SuffixAlgorithm::Auto,
        naive_threshold: 16,
    };

    /// Always use prefix doubling.
    pub const DOUBLING: Self = Self {
        algorithm: SuffixAlgorithm::PrefixDoubling,
        naive_threshold: 0,
    };

    /// Always use the naive comparator sort.
    pub const NAIVE: Self = Self {
        algorithm: SuffixAlgorithm::Naive,
        naive_threshold: 0,
    };

    /// Create a configuration for the given algorithm.
    pub fn new(algorithm: SuffixAlgorithm) -> Self {
        Self {
            algorithm,
            ..Self::DEFAULT
        }
    }

    /// Set the naive sorting threshold used by `Auto`.
    pub fn with_naive_threshold(mut self, threshold: usize) -> Self {
        self.naive_threshold = threshold;
        self
    }

    /// Resolve the algorithm to run for an input of `len` bytes.
    pub fn resolve(&self, len: usize) -> SuffixAlgorithm {
        match self.algorithm {
            SuffixAlgorithm::Auto if len < self.naive_threshold => SuffixAlgorithm::Naive,
            SuffixAlgorithm::Auto => SuffixAlgorithm::PrefixDoubling,
            other => other,
        }
    }
}

impl Default for SuffixSortConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
