//! Size calculators for encoded TLV fields
//!
//! Pure, stateless helpers that measure how many bytes the tag and length
//! fields of a node occupy, and how long the value they announce is. They
//! look only at the field bytes themselves; the parser combines them into
//! node spans.

use tlv_core::{TlvError, TlvResult};

/// High bit flagging a long-form length (and tag continuation bytes)
const HIGH_BIT: u8 = 0x80;

/// Low-5-bits pattern marking an extended (multi-byte) tag
const EXTENDED_MASK: u8 = 0x1F;

/// Number of bytes occupied by the encoded tag at the start of `bytes`
///
/// Returns 1 unless the low 5 bits of the first byte are all set
/// (extended form), in which case the tag runs through every following
/// byte whose high bit is set, plus the terminating byte with a clear
/// high bit.
///
/// Note that tags longer than 2 bytes are measured here (so the parser
/// can frame them) even though they cannot be decoded or matched — see
/// the two-byte ceiling documented on [`tlv_core::Tag`].
///
/// # Error Handling
/// Returns `TlvError::Truncated` if `bytes` ends before a terminating
/// byte is seen.
pub fn tag_length(bytes: &[u8]) -> TlvResult<usize> {
    let first = *bytes.first().ok_or(TlvError::Truncated("tag"))?;
    if first & EXTENDED_MASK != EXTENDED_MASK {
        return Ok(1);
    }

    let mut length = 1;
    loop {
        let byte = *bytes
            .get(length)
            .ok_or(TlvError::Truncated("extended tag"))?;
        length += 1;
        if byte & HIGH_BIT == 0 {
            return Ok(length);
        }
    }
}

/// Number of bytes occupied by the encoded length field at the start of
/// `bytes`
///
/// Short form (high bit clear) is a single byte; long form occupies
/// `1 + (first_byte & 0x7F)` bytes.
pub fn length_length(bytes: &[u8]) -> TlvResult<usize> {
    let first = *bytes.first().ok_or(TlvError::Truncated("length"))?;
    if first & HIGH_BIT == 0 {
        Ok(1)
    } else {
        Ok(1 + (first & 0x7F) as usize)
    }
}

/// Value length announced by the encoded length field at the start of
/// `bytes`
///
/// Short form carries the value length directly (0-127); long form
/// accumulates the following `length_length - 1` bytes as a big-endian
/// integer.
///
/// # Error Handling
/// Returns `TlvError::Truncated` if the long-form bytes run past the end
/// of `bytes`, and `TlvError::LengthTooLarge` if the announced length
/// does not fit in a `usize`.
pub fn value_length(bytes: &[u8]) -> TlvResult<usize> {
    let first = *bytes.first().ok_or(TlvError::Truncated("length"))?;
    if first & HIGH_BIT == 0 {
        return Ok((first & 0x7F) as usize);
    }

    let length_bytes = (first & 0x7F) as usize;
    if length_bytes > size_of::<usize>() {
        return Err(TlvError::LengthTooLarge(length_bytes));
    }

    let mut length = 0usize;
    for i in 1..=length_bytes {
        let byte = *bytes.get(i).ok_or(TlvError::Truncated("long-form length"))?;
        length = (length << 8) | byte as usize;
    }
    Ok(length)
}
