//! Error types for the solver framework

use thiserror::Error;

/// Error raised while parsing puzzle input.
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input does not match the expected structure
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    /// A required piece of the input is absent
    #[error("missing data: {0}")]
    MissingData(String),
    /// Any other parse failure
    #[error("parse error: {0}")]
    Other(String),
}

impl ParseError {
    /// Wraps any displayable error as [`ParseError::Other`].
    pub fn other(err: impl std::fmt::Display) -> Self {
        Self::Other(err.to_string())
    }
}

/// Error raised while solving a part.
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part number exceeds the solver's `PARTS`
    #[error("part {0} is out of range")]
    PartOutOfRange(u8),
    /// The search space was exhausted without reaching the goal
    #[error("no solution: {0}")]
    NoSolution(String),
    /// An error occurred while computing the answer
    #[error("solve failed: {0}")]
    Failed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error raised by registry-level solver operations.
#[derive(Debug, Error)]
pub enum SolverError {
    /// No solver registered for the given year and day
    #[error("no solver registered for year {0} day {1}")]
    NotFound(u16, u8),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// Error raised while building a registry.
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// A solver is already registered for this year-day combination
    #[error("duplicate solver registration for year {0} day {1}")]
    Duplicate(u16, u8),
}
