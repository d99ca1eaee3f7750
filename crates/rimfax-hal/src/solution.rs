//! Solver results in binary and spin notation.

use serde::{Deserialize, Serialize};

use rimfax_qubo::spin;

/// Result of a single solve: the minimal objective value and the binary
/// assignment that attains it.
///
/// The assignment is over {0, 1} and indexed by the program's variable
/// (discovery) order. The objective is the raw value of the converted
/// program; use [`Solution::energy`] to add the Ising offset back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// Minimal objective value found, without the Ising offset.
    pub objective: f64,
    /// Binary assignment in variable order, values in {0, 1}.
    pub assignment: Vec<u8>,
}

impl Solution {
    /// Create a solution.
    pub fn new(objective: f64, assignment: Vec<u8>) -> Self {
        Self {
            objective,
            assignment,
        }
    }

    /// The Ising ground-state energy estimate: objective plus `offset`.
    pub fn energy(&self, offset: f64) -> f64 {
        self.objective + offset
    }

    /// The assignment in spin notation, `S = 1 − 2X`.
    pub fn spins(&self) -> Vec<i8> {
        self.assignment.iter().map(|&x| spin::to_spin(x)).collect()
    }

    /// The assignment as a concatenated string of `+`/`-` sign tokens.
    pub fn sign_string(&self) -> String {
        spin::sign_string(&self.assignment)
    }
}
