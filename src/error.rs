//! Error types for map file access and encoding.
//!
//! Parsing itself is total (malformed lines are skipped and a truncated
//! block simply ends the document), so errors here come from three places:
//! typed access to a [`Document`](crate::Document), encoding a value that
//! has no line form, and the I/O edge when reading or writing a file.
//!
//! ## Examples
//!
//! ```rust
//! use mapfile::{from_str, Error};
//!
//! let doc = from_str("count=abc");
//! match doc.get_integer("count") {
//!     Err(Error::Format { .. }) => {}
//!     other => panic!("expected a format error, got {other:?}"),
//! }
//! assert!(matches!(doc.get_integer("missing"), Err(Error::KeyNotFound(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// All failures surfaced by this crate.
///
/// Lookup and coercion failures are reported immediately and never retried
/// or recovered internally. Failures raised inside a delegated
/// [`FromValue`](crate::FromValue) construction pass through unchanged.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// An accessor was called with a key the document does not contain.
    #[error("key '{0}' is not present in the document")]
    KeyNotFound(String),

    /// The value is present but cannot be coerced to the requested shape.
    #[error("the value for '{key}' is not {expected}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
    },

    /// The value has the right shape but its text does not parse as the
    /// requested scalar type.
    #[error("cannot parse '{text}' as {expected}")]
    Format {
        text: String,
        expected: &'static str,
    },

    /// A [`FromValue`](crate::FromValue) implementation rejected the stored
    /// value it was given.
    #[error("cannot construct {type_name}: {reason}")]
    Construction {
        type_name: &'static str,
        reason: String,
    },

    /// The writer was handed a value that has no line encoding.
    #[error("cannot encode {0} in a map file")]
    Unencodable(&'static str),

    /// Reading or writing the backing text resource failed.
    #[error("io error: {0}")]
    Io(String),
}

impl Error {
    /// Creates a [`Error::KeyNotFound`] for `key`.
    pub fn key_not_found(key: &str) -> Self {
        Error::KeyNotFound(key.to_string())
    }

    /// Creates a [`Error::TypeMismatch`] for the value stored under `key`.
    pub fn type_mismatch(key: &str, expected: &'static str) -> Self {
        Error::TypeMismatch {
            key: key.to_string(),
            expected,
        }
    }

    /// Creates a [`Error::Format`] for `text` that failed to parse.
    pub fn format(text: &str, expected: &'static str) -> Self {
        Error::Format {
            text: text.to_string(),
            expected,
        }
    }

    /// Creates a [`Error::Construction`] naming the target type `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mapfile::Error;
    ///
    /// let err = Error::construction::<u32>("expected a map");
    /// assert!(err.to_string().contains("u32"));
    /// ```
    pub fn construction<T>(reason: impl fmt::Display) -> Self {
        Error::Construction {
            type_name: std::any::type_name::<T>(),
            reason: reason.to_string(),
        }
    }

    /// Wraps an I/O failure message.
    pub fn io(err: impl fmt::Display) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
