//! Breadth-first graph linearization.
//!
//! Flattens a sparse edge-weight map into the pair of coefficient tables a
//! QUBO solver consumes. Conceptually this fills the upper triangle of the
//! symmetric weight matrix
//!
//! ```text
//!        | X0 | X1 | X2
//!   -----+----+----+----
//!    X0  | l0 | q01| q02
//!    X1  |    | l1 | q12
//!    X2  |    |    | l2
//! ```
//!
//! where the diagonal becomes the linear table and the off-diagonal entries
//! the quadratic table. Traversal is breadth-first, seeded at the lowest
//! unvisited node index, so the linear table lists variables in discovery
//! order and disconnected graphs produce one BFS tree per component.

use std::collections::VecDeque;

use tracing::debug;

use crate::graph::EdgeWeights;
use crate::program::{QuboProgram, Var};

/// Linearize `weights` over `num_nodes` nodes into a [`QuboProgram`].
///
/// Every node is visited exactly once. The current node's self-weight
/// (default 0 when absent) becomes its linear coefficient; each defined edge
/// `(curr, j)` with `curr < j` and `j` unvisited enqueues `j` and records the
/// weight as the quadratic coefficient for the ordered pair.
///
/// There are no failure modes: absent edges are zero, and node counts larger
/// than any referenced index simply yield zero-bias entries.
pub fn linearize(weights: &EdgeWeights, num_nodes: u32) -> QuboProgram {
    let mut visited = vec![false; num_nodes as usize];
    let mut program = QuboProgram::default();
    let mut queue: VecDeque<u32> = VecDeque::new();

    for root in 0..num_nodes {
        if visited[root as usize] {
            continue;
        }
        queue.push_back(root);
        while let Some(curr) = queue.pop_front() {
            visited[curr as usize] = true;
            program
                .linear
                .set(Var(curr), weights.get(curr, curr).unwrap_or(0) as f64);
            for j in curr..num_nodes {
                if let Some(w) = weights.get(curr, j) {
                    if !visited[j as usize] {
                        queue.push_back(j);
                        if curr == j {
                            // Unreachable once curr is marked visited; the
                            // default above already carries the self-weight.
                            program.linear.set(Var(curr), w as f64);
                        } else {
                            program.quadratic.set(Var(curr), Var(j), w as f64);
                        }
                    }
                }
            }
        }
    }

    debug!(
        num_nodes,
        linear = program.linear.len(),
        quadratic = program.quadratic.len(),
        "linearized edge-weight map"
    );
    program
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_pairs_only_yields_empty_quadratic() {
        let mut weights = EdgeWeights::new();
        weights.insert(0, 0, 3);
        weights.insert(2, 2, -1);
        let program = linearize(&weights, 3);

        assert!(program.quadratic.is_empty());
        assert_eq!(program.linear.get(Var(0)), Some(3.0));
        assert_eq!(program.linear.get(Var(1)), Some(0.0));
        assert_eq!(program.linear.get(Var(2)), Some(-1.0));
    }

    #[test]
    fn test_disconnected_nodes_in_ascending_order() {
        let weights = EdgeWeights::new();
        let program = linearize(&weights, 4);

        let vars: Vec<_> = program.linear.vars().collect();
        assert_eq!(vars, vec![Var(0), Var(1), Var(2), Var(3)]);
        assert!(program.linear.iter().all(|(_, c)| c == 0.0));
        assert!(program.quadratic.is_empty());
    }

    #[test]
    fn test_two_node_edge() {
        let mut weights = EdgeWeights::new();
        weights.insert(0, 1, 5);
        let program = linearize(&weights, 2);

        assert_eq!(program.linear.get(Var(0)), Some(0.0));
        assert_eq!(program.linear.get(Var(1)), Some(0.0));
        assert_eq!(program.quadratic.get(Var(0), Var(1)), Some(5.0));
        assert_eq!(program.quadratic.len(), 1);
    }

    #[test]
    fn test_path_graph_discovery_order() {
        // 0 - 1 - 2 plus an isolated component 3 - 4
        let mut weights = EdgeWeights::new();
        weights.insert(0, 1, 5);
        weights.insert(1, 2, 3);
        weights.insert(3, 4, 2);
        let program = linearize(&weights, 5);

        let vars: Vec<_> = program.linear.vars().collect();
        assert_eq!(vars, vec![Var(0), Var(1), Var(2), Var(3), Var(4)]);
        assert_eq!(program.quadratic.get(Var(0), Var(1)), Some(5.0));
        assert_eq!(program.quadratic.get(Var(1), Var(2)), Some(3.0));
        assert_eq!(program.quadratic.get(Var(3), Var(4)), Some(2.0));
    }

    #[test]
    fn test_node_count_beyond_edges_adds_zero_bias() {
        let mut weights = EdgeWeights::new();
        weights.insert(0, 1, 1);
        let program = linearize(&weights, 4);

        assert_eq!(program.num_vars(), 4);
        assert_eq!(program.linear.get(Var(3)), Some(0.0));
    }

    #[test]
    fn test_star_graph_bfs_order() {
        // Star centered at 1: edges (1,2), (1,3), plus (0,1).
        let mut weights = EdgeWeights::new();
        weights.insert(0, 1, 1);
        weights.insert(1, 2, 1);
        weights.insert(1, 3, 1);
        let program = linearize(&weights, 4);

        let vars: Vec<_> = program.linear.vars().collect();
        assert_eq!(vars, vec![Var(0), Var(1), Var(2), Var(3)]);
        assert_eq!(program.quadratic.len(), 3);
    }
}
