use std::fmt;

/// Result type for shapetree operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while mirroring or rendering a structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A value expected to be a tensor was something else
    TypeConstraint { found: &'static str },
    /// Nesting exceeded the configured maximum depth
    DepthExceeded { depth: usize, limit: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TypeConstraint { found } => {
                write!(f, "expected a tensor value, found {}", found)
            }
            Error::DepthExceeded { depth, limit } => {
                write!(f, "maximum nesting depth exceeded: {} > {}", depth, limit)
            }
        }
    }
}

impl std::error::Error for Error {}
