//! `rimfax-qubo` — QUBO data model and the two Rimfax core transforms.
//!
//! Converts a weighted undirected graph into a Quadratic Unconstrained
//! Binary Optimization problem and rewrites it into the equivalent
//! Ising-Hamiltonian form:
//!
//! - [`linearize`] walks the sparse edge-weight map breadth-first and
//!   produces ordered linear / quadratic coefficient tables.
//! - [`to_ising`] applies the closed-form X = (1 − S)/2 substitution,
//!   yielding rewritten tables plus a scalar offset.
//!
//! Both transforms are single-pass, non-concurrent, and total — there are no
//! error paths. The actual minimum-eigenvalue solving lives behind the
//! `rimfax-hal` solver boundary.
//!
//! # Quick start
//!
//! ```rust
//! use rimfax_qubo::{EdgeWeights, Var, linearize, to_ising};
//!
//! // Single edge of weight 5 between nodes 0 and 1.
//! let mut weights = EdgeWeights::new();
//! weights.insert(0, 1, 5);
//!
//! let qubo = linearize(&weights, 2);
//! let ising = to_ising(qubo);
//!
//! assert_eq!(ising.linear.get(Var(0)), Some(-10.0));
//! assert_eq!(ising.quadratic.get(Var(0), Var(1)), Some(20.0));
//! assert_eq!(ising.offset, 5.0);
//! ```

pub mod graph;
pub mod ising;
pub mod linearize;
pub mod program;
pub mod spin;

pub use graph::EdgeWeights;
pub use ising::to_ising;
pub use linearize::linearize;
pub use program::{IsingProgram, LinearTable, QuadraticTable, QuboProgram, Var};
pub use spin::{sign_string, sign_token, to_spin};
