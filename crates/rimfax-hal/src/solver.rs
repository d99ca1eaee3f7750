//! Solver trait and capability introspection.
//!
//! The [`Solver`] trait is the boundary between the local transforms and the
//! optimization backend that does the actual minimum-eigenvalue work. The
//! pipeline hands a converted [`IsingProgram`] across this boundary in a
//! single blocking call; there is no job lifecycle, no cancellation, no
//! timeout.
//!
//! ## Design principles
//!
//! - **One-shot**: `solve()` blocks until a result or error is available.
//! - **Infallible introspection**: `capabilities()` is synchronous and
//!   infallible — implementations cache capabilities at construction time.
//! - **Swappable**: the two local transforms stay independently testable
//!   against any implementation, including test doubles.

use serde::{Deserialize, Serialize};

use rimfax_qubo::IsingProgram;

use crate::error::HalResult;
use crate::solution::Solution;

/// What a solver can do: size cap and whether results are exact.
///
/// Cached at construction; `Solver::capabilities` returns a reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capabilities {
    /// Name of the solver.
    pub name: String,
    /// Maximum number of binary variables the solver accepts.
    pub max_vars: usize,
    /// True if the solver always returns the global minimum.
    pub is_exact: bool,
}

impl Capabilities {
    /// Capabilities of an exact solver with the given variable cap.
    pub fn exact(name: impl Into<String>, max_vars: usize) -> Self {
        Self {
            name: name.into(),
            max_vars,
            is_exact: true,
        }
    }

    /// Capabilities of an approximate (heuristic) solver.
    pub fn approximate(name: impl Into<String>, max_vars: usize) -> Self {
        Self {
            name: name.into(),
            max_vars,
            is_exact: false,
        }
    }
}

/// Trait for binary-optimization solvers.
///
/// Implementations minimize the objective of a converted Ising-form program
/// over {0, 1} assignments and report the minimum found together with the
/// attaining assignment.
///
/// # Contract
///
/// - `capabilities()` MUST be synchronous and infallible.
/// - `solve()` MUST reject programs with more than `max_vars` variables
///   with [`crate::HalError::TooManyVariables`] and empty programs with
///   [`crate::HalError::EmptyProgram`].
/// - The returned assignment MUST be indexed by the program's variable
///   order and have exactly `program.num_vars()` entries.
pub trait Solver {
    /// Name of this solver.
    fn name(&self) -> &str;

    /// Capabilities of this solver.
    fn capabilities(&self) -> &Capabilities;

    /// Minimize the program's objective. One-shot, blocking.
    fn solve(&self, program: &IsingProgram) -> HalResult<Solution>;
}
