use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// A required argument was missing or malformed.
    InvalidArgument(&'static str),
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::InvalidArgument(reason) => write!(f, "invalid argument: {reason}"),
        }
    }
}

impl Error for StateError {}
