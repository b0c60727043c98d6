use thiserror::Error;

/// Main error type for TLV operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TlvError {
    /// No TLV node was found in the scanned buffer region.
    #[error("No TLV node found")]
    NotFound,

    /// A write could not be satisfied by the remaining buffer capacity.
    #[error("Insufficient space: need {needed} more bytes, {available} available")]
    InsufficientSpace { needed: usize, available: usize },

    /// A length's own encoded representation would overflow the
    /// length-of-length field (more than 127 length bytes).
    #[error("Length too large to encode: {0} bytes of length-of-length")]
    LengthTooLarge(usize),

    /// An encoded field continues past the end of the buffer.
    #[error("Truncated TLV field: {0}")]
    Truncated(&'static str),
}

/// Result type alias for TLV operations
pub type TlvResult<T> = Result<T, TlvError>;
