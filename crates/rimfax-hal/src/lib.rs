//! `rimfax-hal` — the Rimfax solver abstraction layer.
//!
//! The "hard" computational work of the pipeline — finding the minimum of a
//! converted Ising-form objective — happens outside the transform crates,
//! behind the [`Solver`] capability boundary defined here:
//!
//! ```text
//!   capabilities() ──→ solve(program) ──→ Solution { objective, assignment }
//!    (sync, &ref)       (one-shot, blocking)
//! ```
//!
//! # Example: a custom solver
//!
//! ```rust
//! use rimfax_hal::{Capabilities, HalResult, Solution, Solver};
//! use rimfax_qubo::IsingProgram;
//!
//! struct FirstGuess {
//!     capabilities: Capabilities,
//! }
//!
//! impl Solver for FirstGuess {
//!     fn name(&self) -> &str {
//!         &self.capabilities.name
//!     }
//!
//!     // Sync, infallible — capabilities cached at construction.
//!     fn capabilities(&self) -> &Capabilities {
//!         &self.capabilities
//!     }
//!
//!     fn solve(&self, program: &IsingProgram) -> HalResult<Solution> {
//!         let assignment = vec![0; program.num_vars()];
//!         Ok(Solution::new(program.evaluate(&assignment), assignment))
//!     }
//! }
//! ```

pub mod error;
pub mod solution;
pub mod solver;

pub use error::{HalError, HalResult};
pub use solution::Solution;
pub use solver::{Capabilities, Solver};
