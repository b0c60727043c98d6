//! Tag and length encoders over the reverse writer
//!
//! Multi-byte fields are pushed least-significant byte first; because the
//! writer accumulates toward the head of the arena, the wire ends up
//! most-significant byte first as BER requires.

use crate::writer::ReverseWriter;
use tlv_core::{Tag, TlvError, TlvResult};

/// Largest value that still uses the short (single-byte) length form
const SHORT_FORM_MAX: usize = 0x7F;

/// Encode a length field
///
/// Lengths below 127 are written as a single short-form byte. Longer
/// lengths are written long-form: the length bytes (big-endian on the
/// wire), then the header byte `0x80 | byte_count` in front of them.
///
/// # Error Handling
/// - `TlvError::InsufficientSpace` if any underlying write fails
/// - `TlvError::LengthTooLarge` if the length needs more than 127 bytes
///   of its own (unreachable with `usize` lengths, kept for parity with
///   the wire format's limit)
pub fn encode_length(writer: &mut ReverseWriter<'_>, length: usize) -> TlvResult<()> {
    if length < SHORT_FORM_MAX {
        return writer.push(length as u8);
    }

    let mut remaining = length;
    let mut byte_count = 0usize;
    while remaining > 0 {
        writer.push((remaining & 0xFF) as u8)?;
        byte_count += 1;
        remaining >>= 8;
    }
    if byte_count > SHORT_FORM_MAX {
        return Err(TlvError::LengthTooLarge(byte_count));
    }
    writer.push(0x80 | byte_count as u8)
}

/// Encode a tag
///
/// Writes the low byte, then the high byte when the tag value exceeds
/// `0xFF`, so the wire carries the leading byte first.
pub fn encode_tag(writer: &mut ReverseWriter<'_>, tag: Tag) -> TlvResult<()> {
    writer.push(tag.value() as u8)?;
    if tag.value() > 0xFF {
        writer.push((tag.value() >> 8) as u8)?;
    }
    Ok(())
}

/// Encode a complete tag + length header for a value of `length` bytes
///
/// The length field is written first so the header reads tag-then-length
/// on the wire.
pub fn encode_header(writer: &mut ReverseWriter<'_>, tag: Tag, length: usize) -> TlvResult<()> {
    encode_length(writer, length)?;
    encode_tag(writer, tag)
}
