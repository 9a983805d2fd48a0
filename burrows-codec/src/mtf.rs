//! Move-to-Front Transform.
//!
//! MTF transforms a stream by replacing each byte with its position
//! in a dynamic list. After each byte, that byte is moved to the front
//! of the list. This converts local byte clusters into many zeros.
//!
//! The list is rebuilt from the configured alphabet at the start of every
//! call and dropped at the end, so no state carries over between calls.

use burrows_core::error::{BurrowsError, Result};
use burrows_core::traits::ByteCodec;
use log::debug;

/// Symbol list mutated by one encode or decode call.
#[derive(Debug)]
struct MtfTable {
    symbols: Vec<u8>,
}

impl MtfTable {
    fn new(alphabet: &[u8]) -> Self {
        Self {
            symbols: alphabet.to_vec(),
        }
    }

    fn position(&self, byte: u8) -> Option<usize> {
        self.symbols.iter().position(|&b| b == byte)
    }

    fn symbol(&self, index: usize) -> Option<u8> {
        self.symbols.get(index).copied()
    }

    /// Move the symbol at `index` to the front, shifting the ones before it.
    fn move_to_front(&mut self, index: usize) {
        if index > 0 {
            let byte = self.symbols[index];
            self.symbols.copy_within(0..index, 1);
            self.symbols[0] = byte;
        }
    }
}

/// Move-to-front codec over a fixed initial alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveToFront {
    alphabet: Vec<u8>,
}

impl MoveToFront {
    /// Codec over all 256 byte values in ascending order.
    pub fn new() -> Self {
        Self {
            alphabet: FULL_ALPHABET.to_vec(),
        }
    }

    /// Codec over a restricted alphabet, in the given initial order.
    ///
    /// # Errors
    ///
    /// The alphabet must be non-empty and must not repeat a symbol.
    pub fn with_alphabet(alphabet: &[u8]) -> Result<Self> {
        if alphabet.is_empty() {
            return Err(BurrowsError::invalid_alphabet("alphabet is empty"));
        }
        let mut seen = [false; 256];
        for &byte in alphabet {
            if seen[byte as usize] {
                return Err(BurrowsError::invalid_alphabet(format!(
                    "symbol {byte:#04x} appears more than once"
                )));
            }
            seen[byte as usize] = true;
        }
        Ok(Self {
            alphabet: alphabet.to_vec(),
        })
    }

    /// The initial symbol order.
    pub fn alphabet(&self) -> &[u8] {
        &self.alphabet
    }

    /// Replace each byte with its current position in the table.
    ///
    /// # Errors
    ///
    /// Returns [`BurrowsError::SymbolNotInAlphabet`] for a byte the alphabet
    /// does not contain. Never fails with the full byte alphabet.
    pub fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut table = MtfTable::new(&self.alphabet);
        let mut result = Vec::with_capacity(data.len());

        for (position, &byte) in data.iter().enumerate() {
            let index = table
                .position(byte)
                .ok_or_else(|| BurrowsError::symbol_not_in_alphabet(byte, position))?;
            // Alphabets hold at most 256 symbols.
            result.push(index as u8);
            table.move_to_front(index);
        }

        debug!("mtf encode: {} bytes", data.len());
        Ok(result)
    }

    /// Replace each index with the symbol it addresses, replaying the moves.
    ///
    /// # Errors
    ///
    /// Returns [`BurrowsError::InvalidSymbolIndex`] for an index at or past
    /// the end of the table.
    pub fn decode(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut table = MtfTable::new(&self.alphabet);
        let mut result = Vec::with_capacity(data.len());

        for (position, &index) in data.iter().enumerate() {
            let index = index as usize;
            let byte = table.symbol(index).ok_or_else(|| {
                BurrowsError::invalid_symbol_index(index, position, self.alphabet.len())
            })?;
            result.push(byte);
            table.move_to_front(index);
        }

        debug!("mtf decode: {} bytes", data.len());
        Ok(result)
    }
}

impl Default for MoveToFront {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteCodec for MoveToFront {
    fn name(&self) -> &'static str {
        "mtf"
    }

    fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        MoveToFront::encode(self, input)
    }

    fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        MoveToFront::decode(self, input)
    }
}

/// Perform Move-to-Front transform over the full byte alphabet.
pub fn transform(data: &[u8]) -> Vec<u8> {
    let mut table = MtfTable::new(&FULL_ALPHABET);
    let mut result = Vec::with_capacity(data.len());

    for &byte in data {
        // Every byte is in the full alphabet.
        let index = table.position(byte).unwrap_or_default();
        result.push(index as u8);
        table.move_to_front(index);
    }

    result
}

/// Perform inverse Move-to-Front transform over the full byte alphabet.
pub fn inverse_transform(data: &[u8]) -> Result<Vec<u8>> {
    MoveToFront::new().decode(data)
}

const FULL_ALPHABET: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = i as u8;
        i += 1;
    }
    table
};
