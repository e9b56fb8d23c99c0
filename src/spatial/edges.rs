//! Edge encoding for tile boundaries
//!
//! An edge is the sequence of border pixels along one side of a tile. It is
//! stored as an unsigned integer read most-significant bit first, so a
//! fixed-length edge maps injectively into `[0, 2^L)`. The complement of a
//! code is the same physical edge read from the opposite direction.

use crate::io::configuration::{MAX_EDGE_LENGTH, MIN_EDGE_LENGTH};
use crate::io::error::{Result, invalid_parameter};

/// Integer encoding of the pixels along one tile side
pub type EdgeCode = u32;

/// Encoder for edges of one fixed length
///
/// Complements are computed with a bit reversal over the low `length` bits,
/// which keeps the codec pure and allocation free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeCodec {
    length: usize,
}

impl EdgeCodec {
    /// Create a codec for edges of `length` pixels
    ///
    /// # Errors
    ///
    /// Returns an error if `length` lies outside the supported range
    pub fn new(length: usize) -> Result<Self> {
        if !(MIN_EDGE_LENGTH..=MAX_EDGE_LENGTH).contains(&length) {
            return Err(invalid_parameter(
                "edge_length",
                &length,
                &format!("must lie in {MIN_EDGE_LENGTH}..={MAX_EDGE_LENGTH}"),
            ));
        }
        Ok(Self { length })
    }

    /// Number of pixels along an edge
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Encode a pixel sequence, first pixel as the most significant bit
    ///
    /// Only the first `length` pixels are read; a shorter sequence is
    /// treated as if padded with off pixels.
    pub fn encode<I>(&self, pixels: I) -> EdgeCode
    where
        I: IntoIterator<Item = bool>,
    {
        let mut code: EdgeCode = 0;
        let mut read = 0;
        for pixel in pixels.into_iter().take(self.length) {
            code = (code << 1) | EdgeCode::from(pixel);
            read += 1;
        }
        code.checked_shl((self.length - read) as u32).unwrap_or(0)
    }

    /// Code of the same edge read in the reverse direction
    pub const fn complement(&self, code: EdgeCode) -> EdgeCode {
        code.reverse_bits() >> (EdgeCode::BITS as usize - self.length)
    }

    /// Orientation independent key of an edge
    ///
    /// Both readings of a physical edge share this key.
    pub fn canonical(&self, code: EdgeCode) -> EdgeCode {
        code.min(self.complement(code))
    }

    /// Whether the edge reads the same in both directions
    pub const fn is_palindrome(&self, code: EdgeCode) -> bool {
        self.complement(code) == code
    }
}
