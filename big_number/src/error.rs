//! Errors reported by [`BigNumber`](crate::BigNumber) operations.

use thiserror::Error;

/// The coarse category of a [`BigNumError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The text handed to the parser was not a decimal digit string.
    Parse,
    /// A digit was requested outside `[0, len)`.
    Index,
    /// The result would be negative.
    Underflow,
    /// The divisor was zero.
    DivisionByZero,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BigNumError {
    #[error("cannot parse a number from an empty string")]
    Empty,
    #[error("invalid digit {found:?} at byte {index}")]
    InvalidDigit { found: char, index: usize },
    #[error("digit index {index} out of range for a number of {len} digits")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("arithmetic underflow")]
    Underflow,
    #[error("division by zero")]
    DivisionByZero,
}

impl BigNumError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BigNumError::Empty |
            BigNumError::InvalidDigit { .. } => ErrorKind::Parse,
            BigNumError::IndexOutOfRange { .. } => ErrorKind::Index,
            BigNumError::Underflow => ErrorKind::Underflow,
            BigNumError::DivisionByZero => ErrorKind::DivisionByZero,
        }
    }
}

pub type Result<T> = std::result::Result<T, BigNumError>;

#[test]
fn test_kind() {
    assert_eq!(BigNumError::Empty.kind(), ErrorKind::Parse);
    assert_eq!(BigNumError::InvalidDigit { found: 'x', index: 2 }.kind(), ErrorKind::Parse);
    assert_eq!(BigNumError::IndexOutOfRange { index: 3, len: 3 }.kind(), ErrorKind::Index);
    assert_eq!(BigNumError::Underflow.kind(), ErrorKind::Underflow);
    assert_eq!(BigNumError::DivisionByZero.kind(), ErrorKind::DivisionByZero);
}

#[test]
fn test_display() {
    let err = BigNumError::InvalidDigit { found: '-', index: 0 };
    assert_eq!(err.to_string(), "invalid digit '-' at byte 0");
    assert_eq!(BigNumError::DivisionByZero.to_string(), "division by zero");
}
