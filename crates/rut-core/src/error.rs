//! Error types for RUT parsing
//!
//! All fallible operations return `Result<T, Error>`.
//! A checksum mismatch is not an error: it parses fine and fails `is_valid`.

/// Reasons a string could not be parsed as a RUT
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Error {
    /// The input string was empty
    #[error("rut: empty string")]
    EmptyInput,

    /// Fewer than 5 characters left after removing separators
    #[error("rut: too short (minimum 5 characters)")]
    TooShort,

    /// More than 10 characters left after removing separators
    #[error("rut: too long (maximum 10 characters)")]
    TooLong,

    /// A character outside `0-9`, `K`, `.` and `-`, or a `K` before the last position
    #[error("rut: invalid format")]
    InvalidFormat,
}

impl Error {
    /// Stable machine-readable name, used by JSON front-ends
    pub fn kind(&self) -> &'static str {
        match self {
            Error::EmptyInput => "empty_input",
            Error::TooShort => "too_short",
            Error::TooLong => "too_long",
            Error::InvalidFormat => "invalid_format",
        }
    }
}

/// Result type alias for RUT operations
pub type Result<T> = std::result::Result<T, Error>;
