//! QUBO and Ising coefficient tables.
//!
//! A QUBO objective over binary variables x ∈ {0, 1}ⁿ is
//!
//!   E(x) = Σ_i l_i·x_i  +  Σ_{i<j} q_ij·x_i·x_j
//!
//! stored as a [`LinearTable`] (ordered, one entry per variable in discovery
//! order) and a [`QuadraticTable`] (unordered, one entry per coupled pair).
//! The Ising form adds a scalar offset accumulated by the variable
//! substitution; see [`crate::ising`].

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A binary decision variable, displayed as `X<n>`.
///
/// The index is the node index of the input graph; the solver sees variables
/// in discovery order, which may differ on disconnected graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Var(pub u32);

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X{}", self.0)
    }
}

/// Ordered map from variable to linear coefficient.
///
/// Insertion order is preserved: iteration yields variables in the order they
/// were first set, which the linearizer uses to keep BFS discovery order.
/// Stored as a `Vec<(Var, f64)>` with a hash index for O(1) lookup.
#[derive(Debug, Clone, Default)]
pub struct LinearTable {
    entries: Vec<(Var, f64)>,
    index: FxHashMap<Var, usize>,
}

impl LinearTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the coefficient for `var`, overwriting any previous value.
    ///
    /// A variable keeps the position of its first insertion.
    pub fn set(&mut self, var: Var, coeff: f64) {
        match self.index.get(&var) {
            Some(&pos) => self.entries[pos].1 = coeff,
            None => {
                self.index.insert(var, self.entries.len());
                self.entries.push((var, coeff));
            }
        }
    }

    /// Add `delta` to the coefficient for `var`, creating the entry (at the
    /// end of the order) if the variable has no coefficient yet.
    pub fn add(&mut self, var: Var, delta: f64) {
        match self.index.get(&var) {
            Some(&pos) => self.entries[pos].1 += delta,
            None => {
                self.index.insert(var, self.entries.len());
                self.entries.push((var, delta));
            }
        }
    }

    /// The coefficient for `var`, if set.
    pub fn get(&self, var: Var) -> Option<f64> {
        self.index.get(&var).map(|&pos| self.entries[pos].1)
    }

    /// Position of `var` in insertion order.
    ///
    /// Solver assignments are indexed by this position.
    pub fn position_of(&self, var: Var) -> Option<usize> {
        self.index.get(&var).copied()
    }

    /// Iterate `(var, coeff)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Var, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Variables in insertion order.
    pub fn vars(&self) -> impl Iterator<Item = Var> + '_ {
        self.entries.iter().map(|(v, _)| *v)
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no variable has a coefficient.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Unordered map from an ordered pair of distinct variables to a quadratic
/// coefficient.
///
/// Keys are canonical: the first variable index is strictly less than the
/// second. Iteration order is unspecified.
#[derive(Debug, Clone, Default)]
pub struct QuadraticTable {
    terms: FxHashMap<(Var, Var), f64>,
}

impl QuadraticTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the coefficient for the pair `(a, b)`, overwriting any previous
    /// value. The pair is stored with the lower index first.
    pub fn set(&mut self, a: Var, b: Var, coeff: f64) {
        let key = if a.0 <= b.0 { (a, b) } else { (b, a) };
        self.terms.insert(key, coeff);
    }

    /// The coefficient for the pair `(a, b)`, if set.
    pub fn get(&self, a: Var, b: Var) -> Option<f64> {
        let key = if a.0 <= b.0 { (a, b) } else { (b, a) };
        self.terms.get(&key).copied()
    }

    /// Multiply every coefficient by `factor` in place.
    pub fn scale(&mut self, factor: f64) {
        for coeff in self.terms.values_mut() {
            *coeff *= factor;
        }
    }

    /// Iterate `((a, b), coeff)` entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = ((Var, Var), f64)> + '_ {
        self.terms.iter().map(|(&pair, &coeff)| (pair, coeff))
    }

    /// Number of quadratic terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True if there are no quadratic terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Sum of all coefficients.
    pub fn sum(&self) -> f64 {
        self.terms.values().sum()
    }
}

/// A QUBO objective: linear and quadratic coefficient tables.
#[derive(Debug, Clone, Default)]
pub struct QuboProgram {
    /// Linear coefficients in discovery order.
    pub linear: LinearTable,
    /// Pairwise coefficients, unordered.
    pub quadratic: QuadraticTable,
}

impl QuboProgram {
    /// Number of binary variables.
    pub fn num_vars(&self) -> usize {
        self.linear.len()
    }
}

/// An Ising-equivalent objective produced by [`crate::ising::to_ising`].
///
/// The offset is the constant term introduced by the spin substitution; it
/// must be added back to a solver's objective value to recover the Ising
/// ground-state energy.
#[derive(Debug, Clone, Default)]
pub struct IsingProgram {
    /// Rewritten linear coefficients.
    pub linear: LinearTable,
    /// Quadratic coefficients, uniformly rescaled by 4.
    pub quadratic: QuadraticTable,
    /// Constant term of the substitution.
    pub offset: f64,
}

impl IsingProgram {
    /// Number of binary variables.
    pub fn num_vars(&self) -> usize {
        self.linear.len()
    }

    /// Evaluate the objective for a {0, 1} assignment indexed by the linear
    /// table's insertion order.
    ///
    /// Quadratic terms whose endpoints carry no linear entry contribute
    /// nothing; the converter guarantees every endpoint has one.
    pub fn evaluate(&self, assignment: &[u8]) -> f64 {
        let bit = |pos: usize| assignment.get(pos).copied().unwrap_or(0) as f64;
        let mut total = 0.0;
        for (pos, (_, coeff)) in self.linear.iter().enumerate() {
            total += coeff * bit(pos);
        }
        for ((a, b), coeff) in self.quadratic.iter() {
            if let (Some(i), Some(j)) = (self.linear.position_of(a), self.linear.position_of(b)) {
                total += coeff * bit(i) * bit(j);
            }
        }
        total
    }
}
