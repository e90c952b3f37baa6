use thiserror::Error;

use crate::codec::DecodeError;

/// Represents errors that can occur during Xid operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XidError {
    /// Input bytes or text do not form a valid identifier
    #[error("Invalid ID: {0}")]
    InvalidId(#[from] DecodeError),
    /// Input was of a kind that cannot hold an identifier at all
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl XidError {
    /// Error for a raw byte input of the wrong length
    pub(crate) fn invalid_length(expected: usize, found: usize) -> Self {
        XidError::InvalidId(DecodeError::InvalidLength { expected, found })
    }
}
