//! Single-node parser
//!
//! Locates the first TLV node of a buffer and derives its spans without
//! copying. Only the first top-level node is parsed; siblings are
//! obtained by re-parsing past it (see [`crate::TlvIter`]).

use crate::field::{length_length, tag_length, value_length};
use crate::node::TlvNode;
use tlv_core::{Span, Tag, TlvError, TlvResult};

/// Inter-node padding byte, silently skipped when scanning
const PADDING: u8 = 0x00;

/// Parse the first TLV node of `buffer`
///
/// Scans from offset 0 past any `0x00` padding bytes; the first non-zero
/// byte starts the tag. The length field follows the tag immediately and
/// the value follows the length field, with the value length taken from
/// the length field.
///
/// # Error Handling
/// - `TlvError::NotFound` if the buffer holds nothing but padding
/// - `TlvError::Truncated` if a field or the announced value runs past
///   the end of the buffer
pub fn parse(buffer: &[u8]) -> TlvResult<TlvNode<'_>> {
    for (offset, &byte) in buffer.iter().enumerate() {
        if byte == PADDING {
            continue;
        }

        let tag_span = Span::new(offset, tag_length(&buffer[offset..])?);
        let length_start = tag_span.end();
        let length_span = Span::new(length_start, length_length(&buffer[length_start..])?);
        let value_span = Span::new(length_span.end(), value_length(&buffer[length_start..])?);
        if value_span.end() > buffer.len() {
            return Err(TlvError::Truncated("value"));
        }

        let tag = Tag::decode(&buffer[tag_span.range()])?;
        return Ok(TlvNode::new(buffer, tag, tag_span, length_span, value_span));
    }
    Err(TlvError::NotFound)
}
