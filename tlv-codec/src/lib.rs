//! BER-TLV codec: parse, search, and build TLV records in
//! caller-supplied buffers
//!
//! This crate is the codec layer an application links against to read
//! and build BER-style Tag-Length-Value byte streams — the self-
//! describing nested binary format used by smart-card, EMV, and
//! ASN.1-adjacent protocols — without a full ASN.1 toolchain.
//!
//! # Wire format
//!
//! Each node is a `[Tag] [Length] [Value]` triplet:
//! - tags are 1 or 2 bytes (bit `0x20` of the first byte marks a
//!   constructed node whose value nests further TLV nodes)
//! - lengths are definite only, short form (0-127) or long form
//!   (`0x80 | n` followed by `n` big-endian bytes)
//! - `0x00` bytes between nodes are padding and are skipped
//!
//! # Design
//!
//! Nothing here allocates for payload data or copies value bytes: the
//! parser and traversal hand out [`TlvNode`] views (spans over the
//! caller's buffer), and the [`TlvBuilder`] constructs containers
//! directly inside a caller-supplied arena, writing tail-first so each
//! header can be prepended once its value length is known. Buffers are
//! not shared between threads by the library; a caller that does so must
//! serialize access itself.
//!
//! # Usage Example
//!
//! ```rust
//! use tlv_codec::{search, Tag, TlvBuilder};
//!
//! let mut arena = [0u8; 32];
//! let mut builder = TlvBuilder::create(&mut arena, Tag::new(0x30))?;
//! builder.add_data(Tag::new(0x04), &[0x01, 0x02])?;
//!
//! let encoded = builder.encoded().to_vec();
//! let node = search(&encoded, Tag::new(0x04), true)?;
//! assert_eq!(node.value(), &[0x01, 0x02]);
//! # Ok::<(), tlv_codec::TlvError>(())
//! ```

pub mod builder;
pub mod encode;
pub mod field;
pub mod node;
pub mod parse;
pub mod traverse;
pub mod writer;

pub use builder::TlvBuilder;
pub use node::{TlvIter, TlvNode};
pub use parse::parse;
pub use traverse::{Step, search, traverse};
pub use writer::ReverseWriter;

pub use tlv_core::{Span, Tag, TlvError, TlvResult};
