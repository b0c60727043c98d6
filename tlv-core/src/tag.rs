//! TLV tag type
//!
//! A BER tag identifies a node and carries two structural flags in its
//! first byte:
//!
//! ```text
//! Bits: 8 7 6 5 4 3 2 1
//!       C C P T T T T T
//! ```
//!
//! - **P** (bit 6, `0x20`): constructed — the value is itself a sequence
//!   of nested TLV nodes
//! - **TTTTT** = `11111` (`0x1F`): extended — the tag continues into the
//!   following byte(s), each continuation byte flagging further
//!   continuation via its high bit
//!
//! # Two-byte ceiling
//!
//! This library represents tags as a raw `u16` holding at most two encoded
//! bytes. Extended tags occupying three or more bytes are *framed*
//! correctly by the parser (their byte length is measured so traversal can
//! step over them) but cannot be decoded, matched by `search`, or encoded.
//! This is a deliberate reproduction of the wire subset used by the
//! smart-card profiles this crate targets, not an oversight.

use crate::error::{TlvError, TlvResult};

/// Constructed flag bit in the first tag byte
const CONSTRUCTED_BIT: u8 = 0x20;

/// Low-5-bits pattern marking an extended (multi-byte) tag
const EXTENDED_MASK: u8 = 0x1F;

/// A TLV tag, at most two encoded bytes wide.
///
/// Single-byte tags are the byte value itself (e.g. `0x30`); two-byte tags
/// hold the leading byte in the high half (e.g. `0x9F02`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag(u16);

impl Tag {
    /// Create a tag from its numeric value
    pub fn new(value: u16) -> Self {
        Self(value)
    }

    /// Numeric tag value
    pub fn value(&self) -> u16 {
        self.0
    }

    /// First encoded byte of the tag (the one carrying the flag bits)
    pub fn leading_byte(&self) -> u8 {
        if self.0 > 0xFF {
            (self.0 >> 8) as u8
        } else {
            self.0 as u8
        }
    }

    /// Check whether the value of a node with this tag is itself a
    /// sequence of nested TLV nodes
    pub fn is_constructed(&self) -> bool {
        self.leading_byte() & CONSTRUCTED_BIT != 0
    }

    /// Check whether the tag uses the extended (two-byte) form
    pub fn is_extended(&self) -> bool {
        self.leading_byte() & EXTENDED_MASK == EXTENDED_MASK
    }

    /// Number of bytes the tag occupies on the wire (1 or 2)
    pub fn encoded_len(&self) -> usize {
        if self.0 > 0xFF { 2 } else { 1 }
    }

    /// Encoded tag bytes in wire order
    pub fn to_bytes(&self) -> Vec<u8> {
        if self.0 > 0xFF {
            vec![(self.0 >> 8) as u8, self.0 as u8]
        } else {
            vec![self.0 as u8]
        }
    }

    /// Decode a tag from the start of `bytes`
    ///
    /// Reads one byte, or two when the first byte's low 5 bits are all
    /// set (extended form). Continuation bytes beyond the second are not
    /// consumed (see the module docs on the two-byte ceiling).
    ///
    /// # Error Handling
    /// Returns `TlvError::Truncated` if `bytes` ends before the tag does.
    pub fn decode(bytes: &[u8]) -> TlvResult<Self> {
        let first = *bytes.first().ok_or(TlvError::Truncated("tag"))?;
        if first & EXTENDED_MASK == EXTENDED_MASK {
            let second = *bytes.get(1).ok_or(TlvError::Truncated("extended tag"))?;
            Ok(Self(((first as u16) << 8) | second as u16))
        } else {
            Ok(Self(first as u16))
        }
    }
}

impl From<u16> for Tag {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 > 0xFF {
            write!(f, "0x{:04X}", self.0)
        } else {
            write!(f, "0x{:02X}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_byte_tag() {
        let tag = Tag::new(0x30);
        assert_eq!(tag.encoded_len(), 1);
        assert_eq!(tag.to_bytes(), vec![0x30]);
        assert!(tag.is_constructed()); // SEQUENCE is constructed
        assert!(!tag.is_extended());
    }

    #[test]
    fn test_two_byte_tag() {
        let tag = Tag::new(0x9F02);
        assert_eq!(tag.encoded_len(), 2);
        assert_eq!(tag.to_bytes(), vec![0x9F, 0x02]);
        assert!(tag.is_extended());
        assert!(!tag.is_constructed());
    }

    #[test]
    fn test_decode_single_byte() {
        let tag = Tag::decode(&[0x04, 0xAA]).unwrap();
        assert_eq!(tag.value(), 0x04);
    }

    #[test]
    fn test_decode_extended() {
        let tag = Tag::decode(&[0x9F, 0x02]).unwrap();
        assert_eq!(tag.value(), 0x9F02);
    }

    #[test]
    fn test_decode_truncated_extended() {
        assert_eq!(
            Tag::decode(&[0x9F]),
            Err(TlvError::Truncated("extended tag"))
        );
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(Tag::decode(&[]), Err(TlvError::Truncated("tag")));
    }

    #[test]
    fn test_display() {
        assert_eq!(Tag::new(0x30).to_string(), "0x30");
        assert_eq!(Tag::new(0x9F02).to_string(), "0x9F02");
    }
}
