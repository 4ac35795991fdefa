//! Error types for TSON encoding and decoding.
//!
//! TSON has a deliberately small failure surface: the encode transform is
//! total, so errors come from exactly two places.
//!
//! ## Error Categories
//!
//! - **Native serializer failures**: malformed JSON text handed to
//!   [`from_str`](crate::from_str), or an I/O failure in the reader/writer
//!   helpers. Propagated verbatim as [`Error::Json`] / [`Error::Io`].
//! - **Tag reconstruction failures**: a string carrying a recognized
//!   `t!<KindName>:` prefix whose payload the target kind's constructor
//!   rejects (non-numeric bigint digits, an unparsable date, an invalid URL
//!   or pattern). These fail fast; nothing is caught or retried.
//!
//! ## Examples
//!
//! ```rust
//! use serde_tson::{from_str, Error};
//!
//! // A payload the bigint constructor rejects.
//! let result = from_str("\"t!bigint:abc\"");
//! assert!(matches!(result, Err(Error::InvalidBigInt { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur during TSON encoding/decoding.
///
/// Reconstruction variants include the offending payload to aid debugging.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Error reported by the underlying JSON serializer or deserializer
    #[error("JSON error: {0}")]
    Json(String),

    /// A `t!bigint:` payload that is not a decimal integer
    #[error(
        "invalid bigint payload {payload:?}: expected decimal digits with optional leading '-'"
    )]
    InvalidBigInt { payload: String },

    /// A `t!Date:` payload that is not an ISO-8601 timestamp
    #[error("invalid date payload {payload:?}: {msg}")]
    InvalidDate { payload: String, msg: String },

    /// A `t!URL:` payload that is not a valid URL
    #[error("invalid URL payload {payload:?}: {msg}")]
    InvalidUrl { payload: String, msg: String },

    /// A `t!RegExp:` payload that is not a valid `/source/flags` pattern
    #[error("invalid pattern payload {payload:?}: {msg}")]
    InvalidPattern { payload: String, msg: String },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an I/O error for reader/writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates an error wrapping a failure from the underlying JSON codec.
    pub fn json(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }

    /// Creates a bigint reconstruction error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_tson::Error;
    ///
    /// let err = Error::invalid_bigint("abc");
    /// assert!(err.to_string().contains("abc"));
    /// ```
    pub fn invalid_bigint(payload: &str) -> Self {
        Error::InvalidBigInt {
            payload: payload.to_string(),
        }
    }

    /// Creates a date reconstruction error.
    pub fn invalid_date<T: fmt::Display>(payload: &str, msg: T) -> Self {
        Error::InvalidDate {
            payload: payload.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates a URL reconstruction error.
    pub fn invalid_url<T: fmt::Display>(payload: &str, msg: T) -> Self {
        Error::InvalidUrl {
            payload: payload.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates a pattern reconstruction error.
    pub fn invalid_pattern<T: fmt::Display>(payload: &str, msg: T) -> Self {
        Error::InvalidPattern {
            payload: payload.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_tson::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
