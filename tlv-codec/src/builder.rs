//! In-place TLV container construction
//!
//! The builder assembles a constructed node directly inside a
//! caller-supplied arena, tail-first: child values are written from the
//! end of the arena toward the head, and the parent header is rewritten
//! in front of them after every append so the encoded parent length
//! always agrees with the actual content. A failed append rolls the
//! arena back byte-for-byte.

use crate::encode::encode_header;
use crate::node::TlvNode;
use crate::parse::parse;
use crate::writer::ReverseWriter;
use tlv_core::{Span, Tag, TlvResult};

/// Builder for a TLV container under construction in a byte arena.
///
/// Created empty by [`TlvBuilder::create`]; children are appended in
/// place with [`TlvBuilder::add_data`] / [`TlvBuilder::add_child`]. At
/// every point between calls the arena parses as a well-formed node
/// whose encoded length matches its content — including after a failed
/// append, which restores the arena exactly.
#[derive(Debug)]
pub struct TlvBuilder<'a> {
    writer: ReverseWriter<'a>,
    tag: Tag,
    tag_span: Span,
    length_span: Span,
    value_span: Span,
}

impl<'a> TlvBuilder<'a> {
    /// Create an empty container with the given tag in `arena`
    ///
    /// The arena is zeroed (unused head bytes must read as padding for
    /// the parser) and the zero-length header is written at its tail.
    ///
    /// # Error Handling
    /// Returns `TlvError::InsufficientSpace` if the arena cannot hold
    /// even the empty header.
    pub fn create(arena: &'a mut [u8], tag: Tag) -> TlvResult<Self> {
        let mut writer = ReverseWriter::new(arena);
        writer.clear();
        encode_header(&mut writer, tag, 0)?;

        let mut builder = Self {
            writer,
            tag,
            tag_span: Span::new(0, 0),
            length_span: Span::new(0, 0),
            value_span: Span::new(0, 0),
        };
        builder.refresh_spans()?;
        log::debug!(
            "created container {} with {} bytes free",
            tag,
            builder.free_space()
        );
        Ok(builder)
    }

    /// Append a child node carrying `value` under `tag`
    ///
    /// Writes the child's value, then its header, then rewrites the
    /// parent header in front with the grown length, and re-derives the
    /// spans by re-parsing. On failure the arena is rolled back
    /// byte-for-byte and the error is returned; the parent stays valid.
    pub fn add_data(&mut self, tag: Tag, value: &[u8]) -> TlvResult<()> {
        // reopen the parent header: its bytes may be overwritten, the
        // header is re-encoded in front of the grown value afterwards
        let header_len = self.value_span.offset - self.tag_span.offset;
        self.writer.reclaim(header_len);

        let checkpoint = self.writer.free_space();
        let parent_tag = self.tag;
        let parent_len = self.value_span.len;

        match self.write_child(tag, value, parent_tag, parent_len, checkpoint) {
            Ok(()) => self.refresh_spans(),
            Err(err) => {
                log::debug!("append of {} failed ({}), rolling back", tag, err);
                self.roll_back(checkpoint, parent_tag, parent_len);
                Err(err)
            }
        }
    }

    /// Append an already-parsed node as a child
    ///
    /// Re-encodes the child from its decoded tag and value bytes;
    /// byte-identical to the equivalent [`TlvBuilder::add_data`] call.
    pub fn add_child(&mut self, child: &TlvNode<'_>) -> TlvResult<()> {
        self.add_data(child.tag(), child.value())
    }

    /// The container's tag
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Current decoded value length of the container
    pub fn value_len(&self) -> usize {
        self.value_span.len
    }

    /// Check whether no child has been appended yet
    pub fn is_empty(&self) -> bool {
        self.value_span.is_empty()
    }

    /// Unused bytes remaining at the head of the arena
    pub fn free_space(&self) -> usize {
        self.writer.free_space()
    }

    /// The encoded container bytes written so far
    pub fn encoded(&self) -> &[u8] {
        self.writer.used()
    }

    /// A borrowed view of the container in its current state
    ///
    /// The view is valid until the next mutating call on the builder.
    pub fn node(&self) -> TlvNode<'_> {
        TlvNode::new(
            self.writer.arena(),
            self.tag,
            self.tag_span,
            self.length_span,
            self.value_span,
        )
    }

    /// Write child value + child header + parent header; any failure
    /// leaves partial bytes for the caller to roll back
    fn write_child(
        &mut self,
        tag: Tag,
        value: &[u8],
        parent_tag: Tag,
        parent_len: usize,
        checkpoint: usize,
    ) -> TlvResult<()> {
        self.writer.push_slice(value)?;
        encode_header(&mut self.writer, tag, value.len())?;
        let appended = checkpoint - self.writer.free_space();
        encode_header(&mut self.writer, parent_tag, parent_len + appended)
    }

    /// Restore the arena to its pre-append state
    fn roll_back(&mut self, checkpoint: usize, parent_tag: Tag, parent_len: usize) {
        self.writer.reset_to(checkpoint);
        // the header is re-encoded into the exact space it occupied
        // before the reopen, so these writes cannot fail
        let restored = encode_header(&mut self.writer, parent_tag, parent_len);
        debug_assert!(restored.is_ok());
        debug_assert_eq!(self.writer.free_space(), self.tag_span.offset);
    }

    /// Re-derive the spans from the arena content
    fn refresh_spans(&mut self) -> TlvResult<()> {
        let node = parse(self.writer.arena())?;
        self.tag = node.tag();
        self.tag_span = node.tag_span();
        self.length_span = node.length_span();
        self.value_span = node.value_span();
        Ok(())
    }
}
