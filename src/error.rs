//! Unified error type for costwire.
//!
//! Wraps the codec's decode and encode errors so callers working through the
//! facade handle one type.

use costwire_wire::{DecodeError, DecodeErrorKind, EncodeError};
use thiserror::Error;

/// All costwire errors.
#[derive(Debug, Error)]
pub enum Error {
    /// A payload failed to decode
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// A value failed to encode
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),
}

/// Result type for costwire operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Decode classification, if this is a decode error.
    pub fn decode_kind(&self) -> Option<DecodeErrorKind> {
        match self {
            Error::Decode(e) => Some(e.kind()),
            Error::Encode(_) => None,
        }
    }

    /// Check if the payload was not JSON or had the wrong top-level shape.
    pub fn is_structural(&self) -> bool {
        self.decode_kind() == Some(DecodeErrorKind::Structural)
    }

    /// Check if a required field was absent or mistyped.
    pub fn is_missing_field(&self) -> bool {
        self.decode_kind() == Some(DecodeErrorKind::MissingRequiredField)
    }

    /// Check if a timestamp failed to parse.
    pub fn is_timestamp(&self) -> bool {
        self.decode_kind() == Some(DecodeErrorKind::TimestampParse)
    }
}
