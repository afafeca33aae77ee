//! Error type for [`Vector`](crate::Vector) operations.
//!
//! Every fallible operation checks its arguments before touching the buffer, so
//! a returned error always leaves the container exactly as it was.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

/// Error type for vector operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    /// An index fell outside the logical range of the vector.
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// Number of elements present when the request was made.
        count: usize,
    },

    /// An argument can never be satisfied (e.g. a capacity too large to allocate).
    InvalidArgument(String),

    /// The operation needs at least one element.
    EmptyContainer,
}

impl Display for VectorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::IndexOutOfRange { index, count } => {
                write!(f, "Index out of range: {index} (count is {count})")
            }
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            Self::EmptyContainer => write!(f, "Operation requires a non-empty vector"),
        }
    }
}

impl Error for VectorError {}
