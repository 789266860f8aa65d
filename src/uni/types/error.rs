//! Custom error types for the uni-lookup crate.

use std::num::ParseIntError;

use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Only fatal conditions live here. Malformed UTF-8 and out-of-range
/// codepoints are rendered in-band and never surface as errors.
#[derive(Debug, Error)]
pub enum UniError {
    /// More than one of the mode flags was given.
    #[error("-c / -n / -p / -x are all mutually exclusive")]
    ConflictingModes,

    /// Nothing to look up and no mode flag to say what to do with it.
    #[error("missing search argument")]
    MissingArgument,

    /// A `U+` token whose body is not a hexadecimal number.
    #[error("unable to parse {token:?}: {source}")]
    InvalidCodepoint {
        token: String,
        #[source]
        source: ParseIntError,
    },

    /// Hex input with odd length or a non-hex digit.
    #[error("invalid hex input: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// A `/regex/` search that does not compile.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl UniError {
    /// Whether the caller should follow this error with usage text.
    pub fn is_usage(&self) -> bool {
        matches!(self, UniError::ConflictingModes | UniError::MissingArgument)
    }
}

/// A convenience `Result` type alias using the crate's `UniError` type.
pub type Result<T> = std::result::Result<T, UniError>;
