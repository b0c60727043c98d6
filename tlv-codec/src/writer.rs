//! Reverse (tail-first) buffer writer
//!
//! TLV headers must be written after their value is known, but the value
//! is produced first. Writing bytes from the tail of the arena toward the
//! head lets the header be prepended at lower offsets once the value
//! length is final, without shifting any bytes when the length field
//! turns out to need the long form.

use tlv_core::{TlvError, TlvResult};

/// Bounds-checked writer that appends bytes from the tail of a
/// caller-supplied arena toward the head.
///
/// The writer tracks a single `free_space` cursor: bytes `0..free_space`
/// are unused, bytes `free_space..` have been written. Each push stores
/// one byte at the new cursor position, so a sequence of pushes
/// accumulates in reverse push order.
#[derive(Debug)]
pub struct ReverseWriter<'a> {
    arena: &'a mut [u8],
    free_space: usize,
}

impl<'a> ReverseWriter<'a> {
    /// Create a writer over an arena, with the whole arena free
    pub fn new(arena: &'a mut [u8]) -> Self {
        let free_space = arena.len();
        Self { arena, free_space }
    }

    /// Unused bytes remaining at the head of the arena
    pub fn free_space(&self) -> usize {
        self.free_space
    }

    /// Total arena size
    pub fn capacity(&self) -> usize {
        self.arena.len()
    }

    /// Bytes written so far, in on-buffer order
    pub fn used(&self) -> &[u8] {
        &self.arena[self.free_space..]
    }

    /// Append a single byte at the tail of the free region
    ///
    /// # Error Handling
    /// Returns `TlvError::InsufficientSpace` when the arena is full.
    pub fn push(&mut self, byte: u8) -> TlvResult<()> {
        if self.free_space == 0 {
            return Err(TlvError::InsufficientSpace {
                needed: 1,
                available: 0,
            });
        }
        self.free_space -= 1;
        self.arena[self.free_space] = byte;
        Ok(())
    }

    /// Append a slice so that its on-buffer order matches `bytes`
    ///
    /// Bytes are pushed in reverse input order; since each push lands one
    /// position closer to the head, the final layout reads front-to-back
    /// as the input did.
    ///
    /// Not atomic: on a mid-sequence failure the bytes already pushed
    /// stay written. The container builder rolls the arena back at a
    /// higher level.
    pub fn push_slice(&mut self, bytes: &[u8]) -> TlvResult<()> {
        for &byte in bytes.iter().rev() {
            self.push(byte)?;
        }
        Ok(())
    }

    /// The whole arena, including the free region
    pub(crate) fn arena(&self) -> &[u8] {
        self.arena
    }

    /// Hand back `bytes` of written space to the free region
    ///
    /// Used by the builder to reopen a parent header so that new writes
    /// may claim its bytes.
    pub(crate) fn reclaim(&mut self, bytes: usize) {
        debug_assert!(self.free_space + bytes <= self.arena.len());
        self.free_space += bytes;
    }

    /// Zero the head of the arena and reset the cursor to `free_space`
    ///
    /// Rollback primitive: wipes everything below the checkpoint
    /// (partial writes always land there) and restores the cursor.
    pub(crate) fn reset_to(&mut self, free_space: usize) {
        debug_assert!(free_space <= self.arena.len());
        self.arena[..free_space].fill(0);
        self.free_space = free_space;
    }

    /// Zero the entire arena and mark it all free
    pub(crate) fn clear(&mut self) {
        self.arena.fill(0);
        self.free_space = self.arena.len();
    }
}
