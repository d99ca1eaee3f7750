//! Error types for the solver layer.

use thiserror::Error;

/// Errors that can occur in solver operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HalError {
    /// Program exceeds solver capabilities.
    #[error("Program has {num_vars} variables but solver '{solver}' supports at most {max_vars}")]
    TooManyVariables {
        /// Variables in the program.
        num_vars: usize,
        /// Solver's variable cap.
        max_vars: usize,
        /// Name of the refusing solver.
        solver: String,
    },

    /// Program has no variables to optimize over.
    #[error("Program is empty — no variables to solve")]
    EmptyProgram,

    /// Solver-specific failure.
    #[error("Solve failed: {0}")]
    SolveFailed(String),
}

/// Result type for solver operations.
pub type HalResult<T> = Result<T, HalError>;
