//! Contains the primary `ParseError` type for the library.
use std::fmt;
use thiserror::Error;

/// The two coarse classes of failure a parse can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The input text violates the grammar somewhere.
    MalformedInput,
    /// A parsing routine was entered in a state its caller should have
    /// ruled out. Seeing this means the parser itself is wrong.
    InternalInvariantViolation,
}

impl ErrorCode {
    /// The numeric form of the code, as printed in error descriptions.
    pub fn code(self) -> u8 {
        match self {
            ErrorCode::MalformedInput => 0,
            ErrorCode::InternalInvariantViolation => 1,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorCode::MalformedInput => "MalformedInput",
            ErrorCode::InternalInvariantViolation => "InternalInvariantViolation",
        };
        write!(f, "{} ({})", name, self.code())
    }
}

/// The primary error type for all parsing operations.
///
/// Carries a human-readable message, the class of failure, and the byte
/// offset into the document where the violated rule was checked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error: {message} at offset {offset}. JSON Error Code: {code}")]
pub struct ParseError {
    /// A description of what went wrong.
    pub message: String,
    /// Which class of failure this is.
    pub code: ErrorCode,
    /// Byte offset (0-indexed) into the parsed document.
    pub offset: usize,
}

impl ParseError {
    /// The input does not follow the grammar at `offset`.
    pub(crate) fn malformed(message: impl Into<String>, offset: usize) -> Self {
        ParseError {
            message: message.into(),
            code: ErrorCode::MalformedInput,
            offset,
        }
    }

    /// A routine was reached in a state its caller guarantees impossible.
    pub(crate) fn invariant(message: impl Into<String>, offset: usize) -> Self {
        ParseError {
            message: message.into(),
            code: ErrorCode::InternalInvariantViolation,
            offset,
        }
    }

    /// The full human-readable description, message plus error code.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Shorthand for checking the error class.
    pub fn is_malformed(&self) -> bool {
        self.code == ErrorCode::MalformedInput
    }
}
