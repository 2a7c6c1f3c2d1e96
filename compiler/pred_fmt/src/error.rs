//! Formatting errors.

use std::fmt;

/// Failure while regenerating source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormatError {
    /// The parameter-name buffer could not grow.
    Allocation { requested: usize },
}

impl FormatError {
    #[cold]
    pub(crate) fn allocation(requested: usize) -> Self {
        FormatError::Allocation { requested }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::Allocation { requested } => {
                write!(f, "failed to reserve {requested} parameter name slots")
            }
        }
    }
}

impl std::error::Error for FormatError {}
