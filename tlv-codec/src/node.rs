//! Borrowed TLV node views
//!
//! A [`TlvNode`] is a view into a byte buffer, not an owner: it records
//! where the tag, length field, and value of one node sit. Views stay
//! valid until the backing buffer is mutated or reused.

use crate::parse::parse;
use tlv_core::{Span, Tag};

/// A parsed TLV node: tag, length field, and value spans over a shared
/// buffer.
///
/// Invariant (established by the parser): the tag span immediately
/// precedes the length span, which immediately precedes the value span,
/// with no gaps, and the value span ends within the buffer. All accessors
/// are panic-free under that invariant.
#[derive(Debug, Clone, Copy)]
pub struct TlvNode<'a> {
    buffer: &'a [u8],
    tag: Tag,
    tag_span: Span,
    length_span: Span,
    value_span: Span,
}

impl<'a> TlvNode<'a> {
    pub(crate) fn new(
        buffer: &'a [u8],
        tag: Tag,
        tag_span: Span,
        length_span: Span,
        value_span: Span,
    ) -> Self {
        Self {
            buffer,
            tag,
            tag_span,
            length_span,
            value_span,
        }
    }

    /// The node's decoded tag (at most two bytes wide)
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Byte range of the encoded tag
    pub fn tag_span(&self) -> Span {
        self.tag_span
    }

    /// Byte range of the encoded length field
    pub fn length_span(&self) -> Span {
        self.length_span
    }

    /// Byte range of the value payload
    pub fn value_span(&self) -> Span {
        self.value_span
    }

    /// The encoded tag bytes
    pub fn tag_bytes(&self) -> &'a [u8] {
        &self.buffer[self.tag_span.range()]
    }

    /// The encoded length field bytes
    pub fn length_bytes(&self) -> &'a [u8] {
        &self.buffer[self.length_span.range()]
    }

    /// The value payload bytes
    pub fn value(&self) -> &'a [u8] {
        &self.buffer[self.value_span.range()]
    }

    /// Check whether the value is itself a sequence of nested TLV nodes
    pub fn is_constructed(&self) -> bool {
        self.tag.is_constructed()
    }

    /// Byte range covering the whole encoded node (tag through value)
    pub fn total_span(&self) -> Span {
        Span::new(
            self.tag_span.offset,
            self.value_span.end() - self.tag_span.offset,
        )
    }

    /// The whole encoded node as bytes
    pub fn encoded(&self) -> &'a [u8] {
        &self.buffer[self.total_span().range()]
    }

    /// Iterate over the node's direct children
    ///
    /// Yields nothing for primitive nodes (their value bytes are opaque
    /// payload, not nested nodes).
    pub fn children(&self) -> TlvIter<'a> {
        if self.is_constructed() {
            TlvIter::new(self.value())
        } else {
            TlvIter::new(&[])
        }
    }

    /// The same view re-based onto an enclosing buffer
    ///
    /// `buffer` must contain the view's original buffer starting at
    /// `base`.
    pub(crate) fn rebase(self, buffer: &'a [u8], base: usize) -> Self {
        Self {
            buffer,
            tag: self.tag,
            tag_span: self.tag_span.shift(base),
            length_span: self.length_span.shift(base),
            value_span: self.value_span.shift(base),
        }
    }
}

/// Lazy iterator over the sibling nodes of a buffer slice.
///
/// Each step parses the first node of the remaining region and advances
/// past it. The iterator is restartable: a fresh one over the same
/// unmodified buffer yields the same sequence. Iteration ends at the
/// first region that holds no further node, including a region whose
/// bytes are truncated mid-field.
#[derive(Debug, Clone)]
pub struct TlvIter<'a> {
    buffer: &'a [u8],
    position: usize,
}

impl<'a> TlvIter<'a> {
    /// Iterate the top-level nodes of `buffer`
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }
}

impl<'a> Iterator for TlvIter<'a> {
    type Item = TlvNode<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = parse(&self.buffer[self.position..]).ok()?;
        let node = node.rebase(self.buffer, self.position);
        self.position = node.value_span().end();
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 0x30 container holding tag 0x04 [0x01, 0x02] and tag 0x05 []
    const NESTED: [u8; 8] = [0x30, 0x06, 0x04, 0x02, 0x01, 0x02, 0x05, 0x00];

    #[test]
    fn test_node_accessors() {
        let node = parse(&NESTED).unwrap();
        assert_eq!(node.tag().value(), 0x30);
        assert!(node.is_constructed());
        assert_eq!(node.tag_bytes(), &[0x30]);
        assert_eq!(node.length_bytes(), &[0x06]);
        assert_eq!(node.value(), &NESTED[2..]);
        assert_eq!(node.total_span(), Span::new(0, 8));
        assert_eq!(node.encoded(), &NESTED);
    }

    #[test]
    fn test_children_iteration() {
        let node = parse(&NESTED).unwrap();
        let children: Vec<_> = node.children().collect();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].tag().value(), 0x04);
        assert_eq!(children[0].value(), &[0x01, 0x02]);
        assert_eq!(children[1].tag().value(), 0x05);
        assert!(children[1].value().is_empty());
    }

    #[test]
    fn test_primitive_node_has_no_children() {
        let buffer = [0x04, 0x02, 0x30, 0x00];
        let node = parse(&buffer).unwrap();
        // the value bytes happen to look like a node, but a primitive
        // tag means they are opaque payload
        assert_eq!(node.children().count(), 0);
    }

    #[test]
    fn test_iter_is_restartable() {
        let buffer = [0x04, 0x01, 0xAA, 0x00, 0x05, 0x00];
        let first: Vec<u16> = TlvIter::new(&buffer).map(|n| n.tag().value()).collect();
        let second: Vec<u16> = TlvIter::new(&buffer).map(|n| n.tag().value()).collect();
        assert_eq!(first, vec![0x04, 0x05]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_iter_stops_on_truncated_node() {
        // second node announces 4 value bytes but only 1 remains
        let buffer = [0x04, 0x00, 0x05, 0x04, 0xAA];
        let tags: Vec<u16> = TlvIter::new(&buffer).map(|n| n.tag().value()).collect();
        assert_eq!(tags, vec![0x04]);
    }
}
