//! Array-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during dynamic array operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// `get` was called with an index at or past the logical size.
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// Number of elements present at the time of the call.
        size: usize,
    },
    /// `pop` was called on an array with no elements.
    EmptyArray,
    /// A resize could not obtain its new buffer.
    ///
    /// The array is left exactly as it was before the failing call.
    AllocationFailure {
        /// Number of bytes requested (saturated at `usize::MAX` on overflow).
        requested: usize,
    },
    /// An [`ArrayConfig`](crate::config::ArrayConfig) failed validation.
    InvalidConfig {
        /// Description of which invariant was violated.
        reason: String,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, size } => {
                write!(f, "index {index} out of range for array of size {size}")
            }
            Self::EmptyArray => write!(f, "pop on empty array"),
            Self::AllocationFailure { requested } => {
                write!(f, "allocation failed: requested {requested} bytes")
            }
            Self::InvalidConfig { reason } => {
                write!(f, "invalid array config: {reason}")
            }
        }
    }
}

impl Error for ArrayError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_index() {
        let err = ArrayError::IndexOutOfRange { index: 7, size: 3 };
        assert_eq!(err.to_string(), "index 7 out of range for array of size 3");
    }

    #[test]
    fn display_invalid_config_carries_reason() {
        let err = ArrayError::InvalidConfig {
            reason: "growth_factor must be at least 2".into(),
        };
        assert!(err.to_string().contains("growth_factor"));
    }
}
