use std::fmt;

use thiserror::Error;

/// Errors returned by serial number decoding.
///
/// # Examples
/// ```
/// use sndecode_core::{ErrorKind, decode};
///
/// let err = decode("C02L51").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);
/// assert!(err.to_string().contains("unsupported format"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid format: serial '{serial}': {issue}")]
    InvalidFormat { serial: String, issue: FormatIssue },
    #[error("unsupported format: serial '{serial}' has {length} characters, expected 11 or 12")]
    UnsupportedFormat { serial: String, length: usize },
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            ValidationError::UnsupportedFormat { .. } => ErrorKind::UnsupportedFormat,
        }
    }

    /// The upper-cased input that failed to decode.
    pub fn serial(&self) -> &str {
        match self {
            ValidationError::InvalidFormat { serial, .. }
            | ValidationError::UnsupportedFormat { serial, .. } => serial,
        }
    }
}

/// Coarse classification of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidFormat,
    UnsupportedFormat,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidFormat => "InvalidFormat",
            ErrorKind::UnsupportedFormat => "UnsupportedFormat",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detail carried by [`ValidationError::InvalidFormat`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatIssue {
    #[error("empty input")]
    Empty,
    #[error("non-alphanumeric character {ch:?} at index {index}")]
    NonAlphanumeric { ch: char, index: usize },
    #[error("serial too short: need {needed} characters, got {actual}")]
    Truncated { needed: usize, actual: usize },
    #[error("year code {ch:?} is not a decimal digit")]
    YearNotDigit { ch: char },
    #[error("week code {code:?} is not a decimal number")]
    WeekNotNumeric { code: String },
    #[error("week {week} out of range 1..=53")]
    WeekOutOfRange { week: u8 },
    #[error("unknown semester code {ch:?}")]
    UnknownSemesterCode { ch: char },
    #[error("unknown week code {ch:?}")]
    UnknownWeekCode { ch: char },
}
