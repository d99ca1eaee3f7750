//! `rimfax-dimacs` — line-oriented reader for weighted-graph input files.
//!
//! The format is DIMACS-flavoured:
//!
//! ```text
//! c any number of leading comment lines
//! I p <num_nodes> <num_edges>
//! <node_a> <node_b> <weight>
//! ...
//! ```
//!
//! - Leading lines beginning with `c` are skipped. Only the leading comment
//!   block is special; a `c` line after the first data line is malformed.
//! - The problem line starts with `I` and carries exactly 4 tokens; the
//!   second token is ignored.
//! - Every other line is an undirected edge: three integers, with `(a, b)`
//!   and `(b, a)` equivalent and normalized to `a <= b` on insertion. A
//!   self-pair `(i, i)` is a node's linear bias. Duplicates overwrite.
//!
//! Node indices are not validated against the declared node count, and an
//! `I` line with the wrong token count fails integer parsing like any other
//! malformed line.
//!
//! # Example
//!
//! ```rust
//! let input = "c ring of three nodes\nI p 3 2\n0 1 5\n1 2 3\n";
//! let problem = rimfax_dimacs::parse(input).unwrap();
//! assert_eq!(problem.num_nodes, 3);
//! assert_eq!(problem.weights.get(0, 1), Some(5));
//! ```

pub mod error;

use std::fs;
use std::path::Path;

use tracing::debug;

use rimfax_qubo::EdgeWeights;

pub use error::{DimacsError, DimacsResult};

/// A parsed input file: declared sizes plus the edge-weight map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProblemInput {
    /// Declared number of nodes.
    pub num_nodes: u32,
    /// Declared number of edges.
    pub num_edges: u32,
    /// Edge weights keyed by canonical node pair.
    pub weights: EdgeWeights,
}

/// Read and parse a weighted-graph file from disk.
pub fn read_weights(path: impl AsRef<Path>) -> DimacsResult<ProblemInput> {
    let source = fs::read_to_string(path.as_ref())?;
    let problem = parse(&source)?;
    debug!(
        path = %path.as_ref().display(),
        num_nodes = problem.num_nodes,
        num_edges = problem.num_edges,
        "read weighted-graph input"
    );
    Ok(problem)
}

/// Parse a weighted-graph source string.
pub fn parse(source: &str) -> DimacsResult<ProblemInput> {
    let mut problem = ProblemInput::default();
    let mut in_leading_comments = true;

    for (idx, line) in source.lines().enumerate() {
        let lineno = idx + 1;
        if in_leading_comments && line.starts_with('c') {
            continue;
        }
        in_leading_comments = false;

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if line.starts_with('I') && tokens.len() == 4 {
            problem.num_nodes = parse_int(tokens[2], lineno)?;
            problem.num_edges = parse_int(tokens[3], lineno)?;
        } else {
            if tokens.len() != 3 {
                return Err(DimacsError::MalformedLine {
                    line: lineno,
                    expected: 3,
                    found: tokens.len(),
                });
            }
            let node_a: u32 = parse_int(tokens[0], lineno)?;
            let node_b: u32 = parse_int(tokens[1], lineno)?;
            let weight: i64 = parse_int(tokens[2], lineno)?;
            problem.weights.insert(node_a, node_b, weight);
        }
    }

    Ok(problem)
}

fn parse_int<T: std::str::FromStr<Err = std::num::ParseIntError>>(
    token: &str,
    line: usize,
) -> DimacsResult<T> {
    token.parse().map_err(|source| DimacsError::IntField {
        line,
        token: token.to_string(),
        source,
    })
}
