//! Property-based tests for the linearizer and the Ising rewrite.

use proptest::prelude::*;

use rimfax_qubo::{EdgeWeights, linearize, to_ising};

/// Generate a sparse edge-weight map over up to 8 nodes.
///
/// Pairs are arbitrary (self-pairs included) and weights are small integers,
/// keeping the arithmetic exactly representable in f64.
fn arb_weights() -> impl Strategy<Value = (EdgeWeights, u32)> {
    let num_nodes = 1_u32..=8;
    num_nodes.prop_flat_map(|n| {
        let edge = (0..n, 0..n, -50_i64..=50);
        prop::collection::vec(edge, 0..=12).prop_map(move |edges| {
            let mut weights = EdgeWeights::new();
            for (a, b, w) in edges {
                weights.insert(a, b, w);
            }
            (weights, n)
        })
    })
}

proptest! {
    /// Every node gets exactly one linear entry, visited exactly once.
    #[test]
    fn linear_table_covers_every_node((weights, n) in arb_weights()) {
        let program = linearize(&weights, n);
        prop_assert_eq!(program.num_vars(), n as usize);

        let mut vars: Vec<u32> = program.linear.vars().map(|v| v.0).collect();
        vars.sort_unstable();
        vars.dedup();
        prop_assert_eq!(vars.len(), n as usize);
    }

    /// The offset equals the sum of all original linear and quadratic values.
    #[test]
    fn offset_is_sum_of_inputs((weights, n) in arb_weights()) {
        let program = linearize(&weights, n);
        let expected: f64 = program.linear.iter().map(|(_, c)| c).sum::<f64>()
            + program.quadratic.sum();

        let ising = to_ising(program);
        prop_assert_eq!(ising.offset, expected);
    }

    /// Every Ising quadratic coefficient is exactly 4x its QUBO input.
    #[test]
    fn quadratic_scaled_by_four((weights, n) in arb_weights()) {
        let program = linearize(&weights, n);
        let before: Vec<_> = program.quadratic.iter().collect();

        let ising = to_ising(program);
        for ((a, b), coeff) in before {
            prop_assert_eq!(ising.quadratic.get(a, b), Some(coeff * 4.0));
        }
    }

    /// Rewritten linear coefficients combine the negated-doubled bias with
    /// -2x contributions from each adjacent quadratic term.
    #[test]
    fn linear_rewrite_matches_direct_recomputation((weights, n) in arb_weights()) {
        let program = linearize(&weights, n);
        let ising = to_ising(program.clone());

        for (var, bias) in program.linear.iter() {
            let mut expected = -2.0 * bias;
            for ((a, b), coeff) in program.quadratic.iter() {
                if a == var || b == var {
                    expected += -2.0 * coeff;
                }
            }
            prop_assert_eq!(ising.linear.get(var), Some(expected));
        }
    }
}
