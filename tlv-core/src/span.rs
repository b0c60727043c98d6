//! Byte ranges within a TLV buffer

use std::ops::Range;

/// A contiguous byte range (offset + length) within a buffer.
///
/// Spans identify the encoded tag, length field, and value of a TLV node
/// without copying any bytes. A span is only meaningful together with the
/// buffer it was derived from; it holds no reference of its own so that
/// node views stay `Copy`-cheap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Offset of the first byte within the buffer
    pub offset: usize,
    /// Number of bytes covered
    pub len: usize,
}

impl Span {
    /// Create a span from an offset and length
    pub fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Offset one past the last byte covered
    pub fn end(&self) -> usize {
        self.offset + self.len
    }

    /// The span as an index range
    pub fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }

    /// Check whether the span covers no bytes
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The same span re-based against an enclosing buffer
    ///
    /// Used when spans computed relative to a sub-slice must be expressed
    /// relative to the buffer the sub-slice came from.
    pub fn shift(&self, base: usize) -> Self {
        Self {
            offset: self.offset + base,
            len: self.len,
        }
    }
}
