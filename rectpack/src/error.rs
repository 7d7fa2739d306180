use std::fmt::{Display, Formatter};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RPError>;

/// Either of the two dimensions of the bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Width => write!(f, "width"),
            Axis::Height => write!(f, "height"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RPError {
    /// The input could not be interpreted as a list of rectangles
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid rectangle {id}: {reason}")]
    InvalidRectangle { id: usize, reason: String },

    #[error("invalid sequence-pair: {0}")]
    InvalidSequencePair(String),

    /// An odd rotation flag was set for a rectangle that cannot be rotated
    #[error("rectangle {id} is not rotatable, but its rotation flag is odd")]
    InvalidRotation { id: usize },

    #[error("{axis} limit {limit} is smaller than the minimum feasible {axis} {minimum}")]
    LimitBelowMinimum {
        axis: Axis,
        limit: f64,
        minimum: f64,
    },

    /// No neighbor satisfying the size limits was found within the retry budget
    #[error("no feasible neighbor found after {attempts} attempts")]
    InfeasibleNeighborhood { attempts: usize },
}

impl RPError {
    /// Whether this is the recoverable search infeasibility, as opposed to a validation error.
    pub fn is_infeasible(&self) -> bool {
        matches!(self, RPError::InfeasibleNeighborhood { .. })
    }
}
