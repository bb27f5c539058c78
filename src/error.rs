//! Error types for dotenv serialization.
//!
//! Encoding either succeeds completely or fails with a single error; the
//! serializer never emits partial output, logs, or substitutes defaults.
//!
//! ## Error Categories
//!
//! - **Unsupported Types**: the value tree contains something that has no
//!   `KEY=VALUE` representation (see [`Error::UnsupportedType`])
//! - **I/O Errors**: writing the encoded text to a writer failed
//!
//! ## Examples
//!
//! ```rust
//! use serde_dotenv::{to_string, Error};
//!
//! // A bare scalar has no key to be written under.
//! let result = to_string(&42);
//! assert!(matches!(result, Err(Error::UnsupportedType(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur during dotenv serialization.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error while writing the encoded output
    #[error("IO error: {0}")]
    Io(String),

    /// A value with no dotenv representation was reached during traversal.
    ///
    /// The format supports scalars, optional values, records of named
    /// fields, and flat sequences of scalars. Anything else (nested
    /// sequences, sequences of records, unit values, non-unit enum
    /// variants, a bare scalar at the top level) fails the entire
    /// encode with this variant.
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error raised through `serde::ser::Error`
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates an unsupported type error for values that cannot be encoded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_dotenv::Error;
    ///
    /// let err = Error::unsupported_type("nested sequences");
    /// assert!(err.to_string().contains("nested sequences"));
    /// ```
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
