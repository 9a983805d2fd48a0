//! Error types for burrows transforms.
//!
//! Every transform in this workspace is a pure function over an in-memory
//! buffer, so the only failures are malformed input (a bad first-row index,
//! an out-of-range move-to-front index, a truncated frame) and I/O at the
//! outer boundary.

use std::io;
use thiserror::Error;

/// The main error type for burrows operations.
#[derive(Debug, Error)]
pub enum BurrowsError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// First-row index of a Burrows-Wheeler block is out of range.
    #[error("Invalid first-row index {first} for block of length {len}")]
    InvalidFirstIndex {
        /// The first-row index that was supplied.
        first: usize,
        /// Length of the last column.
        len: usize,
    },

    /// Row requested from a suffix index is out of range.
    #[error("Row {row} out of range for index of length {len}")]
    RowOutOfRange {
        /// The requested row.
        row: usize,
        /// Number of rows in the index.
        len: usize,
    },

    /// Move-to-front index does not address an entry in the symbol table.
    #[error("Invalid move-to-front index {index} at position {position} (table has {alphabet_len} symbols)")]
    InvalidSymbolIndex {
        /// The index that was read.
        index: usize,
        /// Position of the index in the input.
        position: usize,
        /// Number of symbols in the table.
        alphabet_len: usize,
    },

    /// Byte to encode is not part of the configured alphabet.
    #[error("Symbol {symbol:#04x} at position {position} is not in the alphabet")]
    SymbolNotInAlphabet {
        /// The offending byte.
        symbol: u8,
        /// Position of the byte in the input.
        position: usize,
    },

    /// Alphabet passed to a move-to-front codec is unusable.
    #[error("Invalid alphabet: {message}")]
    InvalidAlphabet {
        /// Description of the problem.
        message: String,
    },

    /// Unexpected end of input.
    #[error("Unexpected end of input: expected {expected} more bytes")]
    UnexpectedEof {
        /// Number of bytes that were expected but not available.
        expected: usize,
    },

    /// Invalid bit count passed to the frame reader/writer.
    #[error("Invalid bit count: {count} (must be 1-32)")]
    InvalidBitCount {
        /// The requested bit count.
        count: u8,
    },

    /// Input is longer than the 32-bit frame header can describe.
    #[error("Input too large: {len} bytes exceeds maximum {max}")]
    InputTooLarge {
        /// Length of the input.
        len: usize,
        /// Maximum supported length.
        max: usize,
    },
}

/// Result type alias for burrows operations.
pub type Result<T> = std::result::Result<T, BurrowsError>;

impl BurrowsError {
    /// Create an invalid first-row index error.
    pub fn invalid_first_index(first: usize, len: usize) -> Self {
        Self::InvalidFirstIndex { first, len }
    }

    /// Create a row-out-of-range error.
    pub fn row_out_of_range(row: usize, len: usize) -> Self {
        Self::RowOutOfRange { row, len }
    }

    /// Create an invalid move-to-front index error.
    pub fn invalid_symbol_index(index: usize, position: usize, alphabet_len: usize) -> Self {
        Self::InvalidSymbolIndex {
            index,
            position,
            alphabet_len,
        }
    }

    /// Create a symbol-not-in-alphabet error.
    pub fn symbol_not_in_alphabet(symbol: u8, position: usize) -> Self {
        Self::SymbolNotInAlphabet { symbol, position }
    }

    /// Create an invalid alphabet error.
    pub fn invalid_alphabet(message: impl Into<String>) -> Self {
        Self::InvalidAlphabet {
            message: message.into(),
        }
    }

    /// Create an unexpected EOF error.
    pub fn unexpected_eof(expected: usize) -> Self {
        Self::UnexpectedEof { expected }
    }

    /// Create an invalid bit count error.
    pub fn invalid_bit_count(count: u8) -> Self {
        Self::InvalidBitCount { count }
    }

    /// Create an input-too-large error.
    pub fn input_too_large(len: usize, max: usize) -> Self {
        Self::InputTooLarge { len, max }
    }

    /// Whether this error was caused by malformed input rather than I/O.
    pub fn is_malformed_input(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BurrowsError::invalid_first_index(12, 12);
        assert!(err.to_string().contains("first-row index 12"));

        let err = BurrowsError::invalid_symbol_index(7, 3, 4);
        assert!(err.to_string().contains("position 3"));
        assert!(err.to_string().contains("4 symbols"));

        let err = BurrowsError::symbol_not_in_alphabet(b'z', 0);
        assert!(err.to_string().contains("0x7a"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: BurrowsError = io_err.into();
        assert!(matches!(err, BurrowsError::Io(_)));
        assert!(!err.is_malformed_input());
    }

    #[test]
    fn test_malformed_input_classification() {
        assert!(BurrowsError::unexpected_eof(4).is_malformed_input());
        assert!(BurrowsError::invalid_alphabet("empty").is_malformed_input());
    }
}
