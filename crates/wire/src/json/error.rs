//! Codec error types
//!
//! Decode failures are always fatal to the call that raised them: a failed
//! record fails its collection, a failed collection fails its range. Optional
//! scalar fields never produce an error; they default to zero instead.
//!
//! | Kind | Variants |
//! |------|----------|
//! | Structural | `InvalidJson`, `Structural` |
//! | MissingRequiredField | `MissingField`, `FieldType` |
//! | TimestampParse | `Timestamp` |
//!
//! `Entry` and `Bucket` add collection/range context and report the kind of
//! the error they wrap.

use serde_json::error::Category;
use thiserror::Error;

/// Coarse classification of a [`DecodeError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeErrorKind {
    /// Payload is not JSON, or not the expected top-level shape
    Structural,
    /// A load-bearing field is absent or has the wrong type
    MissingRequiredField,
    /// `start` or `end` is not an RFC 3339 timestamp
    TimestampParse,
}

/// Decode error types
#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    /// Invalid JSON syntax
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    /// Valid JSON of the wrong shape
    #[error("expected {expected}, found {found}")]
    Structural {
        /// Shape the codec needed
        expected: &'static str,
        /// What was there instead
        found: String,
    },

    /// Required field absent
    #[error("required field `{field}` is missing")]
    MissingField {
        /// Field name
        field: &'static str,
    },

    /// Required field present with the wrong JSON type
    #[error("required field `{field}` must be {expected}, found {found}")]
    FieldType {
        /// Field name
        field: &'static str,
        /// Expected JSON type
        expected: &'static str,
        /// Actual JSON type
        found: &'static str,
    },

    /// Timestamp did not parse
    #[error("field `{field}` is not an RFC 3339 timestamp: {value:?}")]
    Timestamp {
        /// Field name
        field: &'static str,
        /// Offending input
        value: String,
        /// Parser error
        #[source]
        source: chrono::ParseError,
    },

    /// A collection entry failed
    #[error("asset {key:?}: {source}")]
    Entry {
        /// Identifier of the failing entry
        key: String,
        /// Underlying failure
        #[source]
        source: Box<DecodeError>,
    },

    /// A range bucket failed
    #[error("bucket {index}: {source}")]
    Bucket {
        /// Position of the failing bucket
        index: usize,
        /// Underlying failure
        #[source]
        source: Box<DecodeError>,
    },
}

impl DecodeError {
    /// Classify this error
    pub fn kind(&self) -> DecodeErrorKind {
        match self {
            DecodeError::InvalidJson(_) | DecodeError::Structural { .. } => {
                DecodeErrorKind::Structural
            }
            DecodeError::MissingField { .. } | DecodeError::FieldType { .. } => {
                DecodeErrorKind::MissingRequiredField
            }
            DecodeError::Timestamp { .. } => DecodeErrorKind::TimestampParse,
            DecodeError::Entry { source, .. } | DecodeError::Bucket { source, .. } => {
                source.kind()
            }
        }
    }

    /// Innermost error, with collection/range context stripped
    pub fn root(&self) -> &DecodeError {
        match self {
            DecodeError::Entry { source, .. } | DecodeError::Bucket { source, .. } => {
                source.root()
            }
            other => other,
        }
    }

    /// Map a serde_json failure; data errors mean the input had the wrong shape
    pub(crate) fn from_json(err: serde_json::Error, expected: &'static str) -> Self {
        match err.classify() {
            Category::Data => DecodeError::Structural {
                expected,
                found: err.to_string(),
            },
            Category::Syntax | Category::Eof | Category::Io => {
                DecodeError::InvalidJson(err.to_string())
            }
        }
    }

    pub(crate) fn in_entry(self, key: impl Into<String>) -> Self {
        DecodeError::Entry {
            key: key.into(),
            source: Box::new(self),
        }
    }

    pub(crate) fn in_bucket(self, index: usize) -> Self {
        DecodeError::Bucket {
            index,
            source: Box::new(self),
        }
    }
}

/// Encode error types
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The JSON serializer failed
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
