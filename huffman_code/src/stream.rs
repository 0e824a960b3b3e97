// huffman_code/src/stream.rs

use std::fmt;
use std::str::FromStr;

use crate::error::{HuffmanError, Result};

/// A sequence of encoded bits, packed MSB-first into bytes.
///
/// Only the first `bit_count` bits are meaningful; the unused low bits of
/// the final byte are always zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedStream {
    bytes: Vec<u8>,
    bit_count: usize,
}

impl EncodedStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bits: usize) -> Self {
        EncodedStream {
            bytes: Vec::with_capacity((bits + 7) / 8),
            bit_count: 0,
        }
    }

    /// Wraps packed bytes holding `bit_count` meaningful bits.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `bytes` is too short for `bit_count`.
    pub fn from_bytes(bytes: &[u8], bit_count: usize) -> Result<Self> {
        let needed = (bit_count + 7) / 8;
        if bytes.len() < needed {
            return Err(HuffmanError::InvalidInput(format!(
                "{} bits need {} bytes, got {}",
                bit_count,
                needed,
                bytes.len()
            )));
        }

        let mut packed = bytes[..needed].to_vec();
        let spare = needed * 8 - bit_count;
        if let Some(last) = packed.last_mut() {
            *last &= 0xFFu8.checked_shl(spare as u32).unwrap_or(0);
        }
        Ok(EncodedStream {
            bytes: packed,
            bit_count,
        })
    }

    /// Number of bits in the stream.
    pub fn len(&self) -> usize {
        self.bit_count
    }

    pub fn is_empty(&self) -> bool {
        self.bit_count == 0
    }

    /// The packed bytes, padded with zero bits at the end.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn push_bit(&mut self, bit: bool) {
        let byte_index = self.bit_count / 8;
        let bit_offset = self.bit_count % 8;

        if byte_index >= self.bytes.len() {
            self.bytes.push(0);
        }
        if bit {
            self.bytes[byte_index] |= 1 << (7 - bit_offset);
        }
        self.bit_count += 1;
    }

    /// Appends a code written as a string of '0' and '1' characters.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBit` on the first other character. Bits before it
    /// have already been appended.
    pub fn push_code(&mut self, code: &str) -> Result<()> {
        for (position, found) in code.chars().enumerate() {
            match found {
                '0' => self.push_bit(false),
                '1' => self.push_bit(true),
                _ => return Err(HuffmanError::InvalidBit { position, found }),
            }
        }
        Ok(())
    }

    /// Returns the bit at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.bit_count {
            return None;
        }
        Some((self.bytes[index / 8] >> (7 - (index % 8))) & 1 == 1)
    }

    /// Iterates over the bits in order.
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.bit_count).map(move |i| (self.bytes[i / 8] >> (7 - (i % 8))) & 1 == 1)
    }
}

impl fmt::Display for EncodedStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for EncodedStream {
    type Err = HuffmanError;

    fn from_str(s: &str) -> Result<Self> {
        let mut stream = EncodedStream::with_capacity(s.len());
        stream.push_code(s)?;
        Ok(stream)
    }
}

impl FromIterator<bool> for EncodedStream {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut stream = EncodedStream::new();
        for bit in iter {
            stream.push_bit(bit);
        }
        stream
    }
}
