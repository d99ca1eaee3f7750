//! JSON solve report.
//!
//! Serializes one pipeline run — input sizes, converted program shape, and
//! per-backend results — for downstream tooling.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rimfax_dimacs::ProblemInput;
use rimfax_hal::{Solution, Solver};
use rimfax_qubo::IsingProgram;

/// Report for a single solve run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveReport {
    /// UTC timestamp of report generation.
    pub generated_at: DateTime<Utc>,
    /// Input file path as given on the command line.
    pub input: String,
    /// Declared node count.
    pub num_nodes: u32,
    /// Declared edge count.
    pub num_edges: u32,
    /// Variables in the converted program.
    pub num_vars: usize,
    /// Quadratic terms in the converted program.
    pub quadratic_terms: usize,
    /// Scalar offset of the Ising rewrite.
    pub offset: f64,
    /// One entry per backend run.
    pub results: Vec<BackendResult>,
}

impl SolveReport {
    /// Build a report skeleton from the parsed input and converted program.
    pub fn new(input: &str, problem: &ProblemInput, ising: &IsingProgram) -> Self {
        Self {
            generated_at: Utc::now(),
            input: input.to_string(),
            num_nodes: problem.num_nodes,
            num_edges: problem.num_edges,
            num_vars: ising.num_vars(),
            quadratic_terms: ising.quadratic.len(),
            offset: ising.offset,
            results: Vec::new(),
        }
    }

    /// Append a backend result.
    pub fn push(&mut self, result: BackendResult) {
        self.results.push(result);
    }
}

/// One backend's result in spin notation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendResult {
    /// Backend name.
    pub backend: String,
    /// Whether the backend guarantees the global minimum.
    pub is_exact: bool,
    /// Ground-state energy estimate (objective plus offset).
    pub energy: f64,
    /// Raw objective value without the offset.
    pub objective: f64,
    /// Spin assignment as `+`/`-` tokens.
    pub spins: String,
}

impl BackendResult {
    /// Build a result entry from a solver and its solution.
    pub fn new<S: Solver + ?Sized>(solver: &S, solution: &Solution, offset: f64) -> Self {
        Self {
            backend: solver.name().to_string(),
            is_exact: solver.capabilities().is_exact,
            energy: solution.energy(offset),
            objective: solution.objective,
            spins: solution.sign_string(),
        }
    }
}

/// Serialize a report to pretty-printed JSON.
pub fn to_json(report: &SolveReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize report")
}

/// Write a report to a JSON file.
pub fn to_file(report: &SolveReport, path: &Path) -> Result<()> {
    let json = to_json(report)?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}
