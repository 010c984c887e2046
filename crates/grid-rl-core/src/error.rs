//! Error types for the RL core library

use thiserror::Error;

use crate::Position;

/// Reasons a grid description is rejected at construction time
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The grid has no rows, or a row has no cells
    #[error("grid is empty")]
    Empty,

    /// Rows do not all have the same length
    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based index of the offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        actual: usize,
    },

    /// No start cell
    #[error("grid has no start cell")]
    MissingStart,

    /// No goal cell
    #[error("grid has no goal cell")]
    MissingGoal,

    /// More than one start cell
    #[error("grid has more than one start cell: {first} and {second}")]
    DuplicateStart {
        /// First start cell seen in row-major order
        first: Position,
        /// Second start cell seen
        second: Position,
    },

    /// More than one goal cell
    #[error("grid has more than one goal cell: {first} and {second}")]
    DuplicateGoal {
        /// First goal cell seen in row-major order
        first: Position,
        /// Second goal cell seen
        second: Position,
    },
}

/// Core error type for RL operations
#[derive(Error, Debug)]
pub enum RLError {
    /// Malformed grid description
    #[error("Invalid grid: {0}")]
    InvalidGrid(#[from] GridError),

    /// Hyperparameters or training settings out of range
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Dimension mismatch
    #[error("Dimension mismatch: expected {expected:?}, got {actual:?}")]
    DimensionMismatch {
        /// Expected (rows, cols, actions)
        expected: (usize, usize, usize),
        /// Actual (rows, cols, actions)
        actual: (usize, usize, usize),
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias for RL operations
pub type Result<T> = std::result::Result<T, RLError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RLError::from(GridError::RaggedRow {
            row: 2,
            expected: 4,
            actual: 3,
        });
        assert_eq!(err.to_string(), "Invalid grid: row 2 has 3 cells, expected 4");

        let err = RLError::from(GridError::DuplicateGoal {
            first: Position::new(0, 1),
            second: Position::new(3, 3),
        });
        assert_eq!(
            err.to_string(),
            "Invalid grid: grid has more than one goal cell: (0, 1) and (3, 3)"
        );

        let err = RLError::DimensionMismatch {
            expected: (2, 2, 4),
            actual: (3, 3, 4),
        };
        assert_eq!(
            err.to_string(),
            "Dimension mismatch: expected (2, 2, 4), got (3, 3, 4)"
        );
    }
}
