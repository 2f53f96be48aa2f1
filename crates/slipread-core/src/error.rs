//! Error types for the slipread-core library.

use std::fmt;

use thiserror::Error;

/// Main error type for the slipread library.
#[derive(Error, Debug)]
pub enum SlipreadError {
    /// Provider dispatch error.
    #[error("parser error: {0}")]
    Parser(#[from] ParserError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors returned at the registry boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParserError {
    /// No registered parser accepted the text.
    #[error("no matching parser found")]
    NoMatchingParser,

    /// Explicit lookup by provider name found nothing.
    #[error("no parser found for provider: {0}")]
    UnknownProvider(String),
}

impl ParserError {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> ParserErrorCode {
        match self {
            Self::NoMatchingParser => ParserErrorCode::NoMatchingParser,
            Self::UnknownProvider(_) => ParserErrorCode::UnknownProvider,
        }
    }
}

/// Machine-readable registry error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParserErrorCode {
    NoMatchingParser,
    UnknownProvider,
}

impl ParserErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoMatchingParser => "NO_MATCHING_PARSER",
            Self::UnknownProvider => "UNKNOWN_PROVIDER",
        }
    }
}

impl fmt::Display for ParserErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result type for the slipread library.
pub type Result<T> = std::result::Result<T, SlipreadError>;
