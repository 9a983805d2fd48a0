//! MSB-first frame reader and writer.
//!
//! The transforms exchange data in a simple binary framing: a 32-bit
//! big-endian header field followed by 8-bit payload bytes. Bits are packed
//! most significant first, so a 32-bit field written with [`FrameWriter::write_u32`]
//! is byte-for-byte the big-endian encoding of the value.
//!
//! # Example
//!
//! ```
//! use burrows_core::framing::{FrameReader, FrameWriter};
//!
//! let mut writer = FrameWriter::new();
//! writer.write_u32(3).unwrap();
//! writer.write_byte(b'a').unwrap();
//! let data = writer.into_vec().unwrap();
//! assert_eq!(data, [0, 0, 0, 3, b'a']);
//!
//! let mut reader = FrameReader::new(&data);
//! assert_eq!(reader.read_u32().unwrap(), 3);
//! assert_eq!(reader.read_byte().unwrap(), b'a');
//! assert!(reader.at_end());
//! ```

use crate::error::{BurrowsError, Result};

/// MSB-first reader over an in-memory frame.
#[derive(Debug)]
pub struct FrameReader<'a> {
    /// Input data.
    data: &'a [u8],
    /// Current byte position.
    byte_pos: usize,
    /// Bit buffer (MSB-first).
    buffer: u64,
    /// Number of valid bits in buffer (from the low end).
    bits_in_buffer: u8,
    /// Total bits read (for error reporting).
    total_bits_read: u64,
}

impl<'a> FrameReader<'a> {
    /// Create a new frame reader.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            byte_pos: 0,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_read: 0,
        }
    }

    /// Fill buffer with at least `count` bits.
    #[inline]
    fn fill_buffer(&mut self, count: u8) -> Result<()> {
        while self.bits_in_buffer < count && self.byte_pos < self.data.len() {
            let byte = self.data[self.byte_pos];
            self.byte_pos += 1;

            self.buffer = (self.buffer << 8) | (byte as u64);
            self.bits_in_buffer += 8;
        }

        if self.bits_in_buffer < count {
            let missing_bits = (count - self.bits_in_buffer) as usize;
            return Err(BurrowsError::unexpected_eof(missing_bits.div_ceil(8)));
        }

        Ok(())
    }

    /// Read up to 32 bits from the frame (MSB-first).
    pub fn read_bits(&mut self, count: u8) -> Result<u32> {
        if count == 0 || count > 32 {
            return Err(BurrowsError::invalid_bit_count(count));
        }

        self.fill_buffer(count)?;

        let shift = self.bits_in_buffer - count;
        let mask = (1u64 << count) - 1;
        let value = (self.buffer >> shift) & mask;

        self.bits_in_buffer -= count;
        self.total_bits_read += count as u64;

        Ok(value as u32)
    }

    /// Read a 32-bit big-endian integer.
    pub fn read_u32(&mut self) -> Result<u32> {
        self.read_bits(32)
    }

    /// Read a single 8-bit byte.
    pub fn read_byte(&mut self) -> Result<u8> {
        self.read_bits(8).map(|b| b as u8)
    }

    /// Read every remaining byte of the frame.
    ///
    /// Fails if the reader is not byte aligned and a partial byte is left over.
    pub fn read_remaining(&mut self) -> Result<Vec<u8>> {
        if self.bits_in_buffer % 8 != 0 {
            return Err(BurrowsError::unexpected_eof(1));
        }

        let mut output = Vec::with_capacity(self.remaining_bytes());
        while self.bits_in_buffer > 0 {
            output.push(self.read_byte()?);
        }
        output.extend_from_slice(&self.data[self.byte_pos..]);
        self.total_bits_read += ((self.data.len() - self.byte_pos) * 8) as u64;
        self.byte_pos = self.data.len();

        Ok(output)
    }

    /// Whether every bit of the frame has been consumed.
    pub fn at_end(&self) -> bool {
        self.bits_in_buffer == 0 && self.byte_pos >= self.data.len()
    }

    /// Number of whole bytes left to read.
    pub fn remaining_bytes(&self) -> usize {
        (self.bits_in_buffer / 8) as usize + (self.data.len() - self.byte_pos)
    }

    /// Get total bits read.
    pub fn bits_read(&self) -> u64 {
        self.total_bits_read
    }
}

/// MSB-first writer producing an in-memory frame.
#[derive(Debug)]
pub struct FrameWriter {
    /// Output buffer.
    output: Vec<u8>,
    /// Bit buffer (MSB-first).
    buffer: u64,
    /// Number of bits in buffer.
    bits_in_buffer: u8,
}

impl FrameWriter {
    /// Create a new frame writer.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a new frame writer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            output: Vec::with_capacity(capacity),
            buffer: 0,
            bits_in_buffer: 0,
        }
    }

    /// Write up to 32 bits to the frame (MSB-first).
    pub fn write_bits(&mut self, value: u32, count: u8) -> Result<()> {
        if count == 0 || count > 32 {
            return Err(BurrowsError::invalid_bit_count(count));
        }

        let mask = (1u64 << count) - 1;
        self.buffer = (self.buffer << count) | (value as u64 & mask);
        self.bits_in_buffer += count;

        while self.bits_in_buffer >= 8 {
            let byte = (self.buffer >> (self.bits_in_buffer - 8)) as u8;
            self.output.push(byte);
            self.bits_in_buffer -= 8;
        }

        Ok(())
    }

    /// Write a 32-bit integer in big-endian order.
    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        self.write_bits(value, 32)
    }

    /// Write a single 8-bit byte.
    pub fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.write_bits(byte as u32, 8)
    }

    /// Write a run of bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        if self.bits_in_buffer == 0 {
            self.output.extend_from_slice(bytes);
            return Ok(());
        }
        for &byte in bytes {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    /// Flush remaining bits, padding with zeros if needed.
    pub fn flush(&mut self) -> Result<()> {
        if self.bits_in_buffer > 0 {
            let remaining = 8 - self.bits_in_buffer;
            let byte = ((self.buffer << remaining) & 0xFF) as u8;
            self.output.push(byte);
            self.buffer = 0;
            self.bits_in_buffer = 0;
        }
        Ok(())
    }

    /// Get the output data.
    pub fn into_vec(mut self) -> Result<Vec<u8>> {
        self.flush()?;
        Ok(self.output)
    }
}

impl Default for FrameWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u32_is_big_endian() {
        let mut writer = FrameWriter::new();
        writer.write_u32(0x0102_0304).unwrap();
        let data = writer.into_vec().unwrap();
        assert_eq!(data, 0x0102_0304u32.to_be_bytes());

        let mut reader = FrameReader::new(&data);
        assert_eq!(reader.read_u32().unwrap(), 0x0102_0304);
        assert!(reader.at_end());
    }

    #[test]
    fn test_bits_roundtrip() {
        let mut writer = FrameWriter::new();
        writer.write_bits(0b101, 3).unwrap();
        writer.write_bits(0b1100, 4).unwrap();
        writer.write_bits(0xFF, 8).unwrap();
        let data = writer.into_vec().unwrap();

        let mut reader = FrameReader::new(&data);
        assert_eq!(reader.read_bits(3).unwrap(), 0b101);
        assert_eq!(reader.read_bits(4).unwrap(), 0b1100);
        assert_eq!(reader.read_bits(8).unwrap(), 0xFF);
    }

    #[test]
    fn test_read_remaining() {
        let data = [0, 0, 0, 2, b'x', b'y'];
        let mut reader = FrameReader::new(&data);
        assert_eq!(reader.read_u32().unwrap(), 2);
        assert_eq!(reader.remaining_bytes(), 2);
        assert_eq!(reader.read_remaining().unwrap(), b"xy");
        assert!(reader.at_end());
        assert_eq!(reader.bits_read(), 48);
    }

    #[test]
    fn test_truncated_u32() {
        let data = [0, 1];
        let mut reader = FrameReader::new(&data);
        let err = reader.read_u32().unwrap_err();
        assert!(matches!(err, BurrowsError::UnexpectedEof { expected: 2 }));
    }

    #[test]
    fn test_invalid_bit_count() {
        let mut writer = FrameWriter::new();
        assert!(writer.write_bits(0, 0).is_err());
        assert!(writer.write_bits(0, 33).is_err());

        let mut reader = FrameReader::new(&[]);
        assert!(reader.read_bits(33).is_err());
    }

    #[test]
    fn test_empty_frame() {
        let reader = FrameReader::new(&[]);
        assert!(reader.at_end());
        assert_eq!(reader.remaining_bytes(), 0);
    }
}
