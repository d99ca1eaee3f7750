//! Closed-form QUBO → Ising coefficient rewrite.
//!
//! An Ising Hamiltonian over spins S ∈ {−1, +1}ⁿ and a QUBO over binaries
//! X ∈ {0, 1}ⁿ are related by the affine substitution X = (1 − S)/2.
//! Replacing each spin by 1 − 2X and expanding gives an equivalent
//! binary-variable objective in which
//!
//! - every linear coefficient is negated and doubled,
//! - every quadratic coefficient folds −2× itself into both endpoints'
//!   linear coefficients and is itself rescaled by 4,
//! - a scalar offset accumulates each original coefficient once.
//!
//! The offset must be added back to a solver's objective value to recover
//! the Ising ground-state energy.

use tracing::debug;

use crate::program::{IsingProgram, LinearTable, QuboProgram};

/// Rewrite a QUBO program into its Ising-equivalent form.
///
/// Purely arithmetic, no failure modes. The rewrite is not an involution:
/// applying it twice does not restore the input, so it must run exactly once
/// per pipeline.
pub fn to_ising(program: QuboProgram) -> IsingProgram {
    let mut linear = LinearTable::new();
    let mut offset = 0.0;

    for (var, value) in program.linear.iter() {
        linear.set(var, -2.0 * value);
        offset += value;
    }
    for ((a, b), value) in program.quadratic.iter() {
        linear.add(a, -2.0 * value);
        linear.add(b, -2.0 * value);
        offset += value;
    }

    let mut quadratic = program.quadratic;
    quadratic.scale(4.0);

    debug!(
        num_vars = linear.len(),
        quadratic = quadratic.len(),
        offset,
        "rewrote QUBO into Ising form"
    );
    IsingProgram {
        linear,
        quadratic,
        offset,
    }
}
