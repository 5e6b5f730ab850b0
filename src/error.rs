use std::fmt::{Display, Formatter, Result};

#[derive(Debug, PartialEq, Eq)]
pub enum DatabaseError {
    /// The cache was asked to hold zero entries.
    InvalidCapacity(usize),
}

impl Display for DatabaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            DatabaseError::InvalidCapacity(capacity) => write!(
                f,
                "cache capacity must be a positive integer, got {}",
                capacity
            ),
        }
    }
}

// Allow the error to be used with ?
impl std::error::Error for DatabaseError {}
