//! Core types for BER-TLV parsing and construction
//!
//! This crate provides the fundamental types shared by the TLV codec:
//! error handling, byte-range spans, and the tag value type.

pub mod error;
pub mod span;
pub mod tag;

pub use error::{TlvError, TlvResult};
pub use span::Span;
pub use tag::Tag;
