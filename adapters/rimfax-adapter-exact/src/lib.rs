//! `rimfax-adapter-exact` — exact minimum solver by exhaustive enumeration.
//!
//! Plays the role a classical minimum-eigensolver library plays in a full
//! deployment: it walks all `2^n` binary assignments of the converted
//! program and returns the global minimum. Memory-free but exponential in
//! time, so the variable cap is deliberately small.

use tracing::debug;

use rimfax_hal::{Capabilities, HalError, HalResult, Solution, Solver};
use rimfax_qubo::IsingProgram;

/// Default variable cap; 2^24 evaluations is the practical ceiling.
const DEFAULT_MAX_VARS: usize = 24;

/// Exact solver: exhaustive enumeration of all binary assignments.
pub struct ExactSolver {
    capabilities: Capabilities,
}

impl ExactSolver {
    /// Create an exact solver with the default variable cap.
    pub fn new() -> Self {
        Self::with_max_vars(DEFAULT_MAX_VARS)
    }

    /// Create an exact solver with a custom variable cap.
    pub fn with_max_vars(max_vars: usize) -> Self {
        Self {
            capabilities: Capabilities::exact("exact", max_vars),
        }
    }
}

impl Default for ExactSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for ExactSolver {
    fn name(&self) -> &str {
        &self.capabilities.name
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    fn solve(&self, program: &IsingProgram) -> HalResult<Solution> {
        let n = program.num_vars();
        if n == 0 {
            return Err(HalError::EmptyProgram);
        }
        if n > self.capabilities.max_vars {
            return Err(HalError::TooManyVariables {
                num_vars: n,
                max_vars: self.capabilities.max_vars,
                solver: self.capabilities.name.clone(),
            });
        }

        let mut best_mask = 0_u64;
        let mut best_value = f64::INFINITY;
        let mut assignment = vec![0_u8; n];
        for mask in 0..(1_u64 << n) {
            for (pos, bit) in assignment.iter_mut().enumerate() {
                *bit = ((mask >> pos) & 1) as u8;
            }
            let value = program.evaluate(&assignment);
            if value < best_value {
                best_value = value;
                best_mask = mask;
            }
        }

        for (pos, bit) in assignment.iter_mut().enumerate() {
            *bit = ((best_mask >> pos) & 1) as u8;
        }
        debug!(
            num_vars = n,
            objective = best_value,
            "exhaustive search complete"
        );
        Ok(Solution::new(best_value, assignment))
    }
}
