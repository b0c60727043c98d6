//! Depth-first traversal and tag search
//!
//! The traversal engine walks every node of a buffer in preorder: each
//! node is offered to the visitor before its children, and its children
//! are fully visited before its next sibling. Recursion is expressed as
//! an explicit stack of (span, level) frames so call depth stays flat no
//! matter how deeply the input nests.

use crate::node::TlvNode;
use crate::parse::parse;
use tlv_core::{Span, Tag, TlvError, TlvResult};

/// Visitor verdict for one node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Keep walking
    Continue,
    /// Stop the traversal; the current node is the result
    Stop,
}

/// Walk the nodes of `buffer` in depth-first preorder
///
/// For every node found, `visit(node, level)` is called; returning
/// [`Step::Stop`] ends the walk and hands that node back. With
/// `recursive` unset only the top-level siblings are visited. `level` is
/// the nesting depth reported for the top-level nodes; children of a
/// constructed node are reported one deeper.
///
/// Traversal never hard-errors: a region holding no further node — or a
/// node truncated mid-field — ends that region and the walk continues
/// with the frames still pending. `None` means the visitor never stopped.
pub fn traverse<'a, F>(
    buffer: &'a [u8],
    mut visit: F,
    recursive: bool,
    level: usize,
) -> Option<TlvNode<'a>>
where
    F: FnMut(&TlvNode<'a>, usize) -> Step,
{
    let mut frames: Vec<(Span, usize)> = vec![(Span::new(0, buffer.len()), level)];

    while let Some((span, level)) = frames.pop() {
        let node = match parse(&buffer[span.range()]) {
            Ok(node) => node.rebase(buffer, span.offset),
            // exhausted or malformed region: this frame is done
            Err(_) => continue,
        };

        log::trace!("visit tag {} at level {}", node.tag(), level);
        if visit(&node, level) == Step::Stop {
            return Some(node);
        }

        // siblings resume after the children frame is exhausted, so push
        // the remainder of this level first
        let after_node = node.value_span().end();
        frames.push((Span::new(after_node, span.end() - after_node), level));
        if recursive && node.is_constructed() {
            frames.push((node.value_span(), level + 1));
        }
    }
    None
}

/// Locate the first node carrying `tag`, in preorder
///
/// With `recursive` set, constructed nodes are descended into; otherwise
/// only the top-level siblings are candidates. Only tags representable in
/// two encoded bytes can match.
///
/// # Error Handling
/// Returns `TlvError::NotFound` if no node carries the tag.
pub fn search(buffer: &[u8], tag: Tag, recursive: bool) -> TlvResult<TlvNode<'_>> {
    traverse(
        buffer,
        |node, _level| {
            if node.tag() == tag {
                Step::Stop
            } else {
                Step::Continue
            }
        },
        recursive,
        0,
    )
    .ok_or(TlvError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    // P (0x30) containing A (0x21, constructed) then B (0x05),
    // where A contains C (0x04 [0xAA])
    const TREE: [u8; 9] = [0x30, 0x07, 0x21, 0x03, 0x04, 0x01, 0xAA, 0x05, 0x00];

    fn visited(buffer: &[u8], recursive: bool) -> Vec<(u16, usize)> {
        let mut seen = Vec::new();
        let result = traverse(
            buffer,
            |node, level| {
                seen.push((node.tag().value(), level));
                Step::Continue
            },
            recursive,
            0,
        );
        assert!(result.is_none());
        seen
    }

    #[test]
    fn test_preorder_visit_order() {
        assert_eq!(
            visited(&TREE, true),
            vec![(0x30, 0), (0x21, 1), (0x04, 2), (0x05, 1)]
        );
    }

    #[test]
    fn test_non_recursive_stays_at_top_level() {
        assert_eq!(visited(&TREE, false), vec![(0x30, 0)]);

        let siblings = [0x04, 0x01, 0xAA, 0x05, 0x00];
        assert_eq!(visited(&siblings, false), vec![(0x04, 0), (0x05, 0)]);
    }

    #[test]
    fn test_traverse_skips_inter_node_padding() {
        let buffer = [0x00, 0x04, 0x00, 0x00, 0x00, 0x05, 0x00];
        assert_eq!(visited(&buffer, true), vec![(0x04, 0), (0x05, 0)]);
    }

    #[test]
    fn test_traverse_stop_returns_node() {
        let found = traverse(
            &TREE,
            |_, level| if level == 2 { Step::Stop } else { Step::Continue },
            true,
            0,
        )
        .unwrap();
        assert_eq!(found.tag().value(), 0x04);
        assert_eq!(found.value(), &[0xAA]);
    }

    #[test]
    fn test_traverse_start_level_offsets_reporting() {
        let mut levels = Vec::new();
        traverse(
            &TREE,
            |_, level| {
                levels.push(level);
                Step::Continue
            },
            true,
            3,
        );
        assert_eq!(levels, vec![3, 4, 5, 4]);
    }

    #[test]
    fn test_traverse_truncated_child_does_not_abort_walk() {
        // P contains a child announcing more bytes than P holds, followed
        // by a well-formed top-level sibling of P
        let buffer = [0x30, 0x02, 0x04, 0x7A, 0x05, 0x00];
        assert_eq!(visited(&buffer, true), vec![(0x30, 0), (0x05, 0)]);
    }

    #[test]
    fn test_search_recursive_finds_nested() {
        let node = search(&TREE, Tag::new(0x04), true).unwrap();
        assert_eq!(node.value(), &[0xAA]);
    }

    #[test]
    fn test_search_non_recursive_misses_nested() {
        assert_eq!(
            search(&TREE, Tag::new(0x04), false).unwrap_err(),
            TlvError::NotFound
        );
    }

    #[test]
    fn test_search_finds_first_in_preorder() {
        // the same tag appears nested (first in preorder) and top-level
        let buffer = [0x30, 0x03, 0x04, 0x01, 0xAA, 0x04, 0x01, 0xBB];
        let node = search(&buffer, Tag::new(0x04), true).unwrap();
        assert_eq!(node.value(), &[0xAA]);
    }

    #[test]
    fn test_search_extended_tag() {
        let buffer = [0x9F, 0x02, 0x02, 0x12, 0x34];
        let node = search(&buffer, Tag::new(0x9F02), false).unwrap();
        assert_eq!(node.value(), &[0x12, 0x34]);
    }

    #[test]
    fn test_search_empty_buffer() {
        assert_eq!(
            search(&[], Tag::new(0x04), true).unwrap_err(),
            TlvError::NotFound
        );
    }
}
