//! `rimfax-adapter-anneal` — approximate solver via seeded simulated
//! annealing.
//!
//! Stand-in for the approximate quantum-inspired variant of the pipeline:
//! single-flip Metropolis sweeps with geometric cooling. The run is fully
//! determined by the seed and the two-parameter initial point
//! (initial temperature, cooling rate), so a fixed seed reproduces the same
//! solution bit for bit.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use rimfax_hal::{Capabilities, HalError, HalResult, Solution, Solver};
use rimfax_qubo::IsingProgram;

/// Default seed, shared with the pipeline's reporting path.
pub const DEFAULT_SEED: u64 = 10598;

/// Default initial point: (initial temperature, cooling rate).
pub const DEFAULT_INITIAL_POINT: (f64, f64) = (10.0, 0.95);

const DEFAULT_SWEEPS: usize = 1000;
const DEFAULT_MAX_VARS: usize = 4096;

/// Approximate solver: seeded single-flip Metropolis annealing.
pub struct AnnealSolver {
    capabilities: Capabilities,
    seed: u64,
    /// Initial temperature T₀.
    initial_temperature: f64,
    /// Geometric cooling rate, applied once per sweep.
    cooling: f64,
    /// Number of sweeps; each sweep attempts one flip per variable.
    sweeps: usize,
}

impl AnnealSolver {
    /// Create an annealer with the default seed and initial point.
    pub fn new() -> Self {
        Self {
            capabilities: Capabilities::approximate("anneal", DEFAULT_MAX_VARS),
            seed: DEFAULT_SEED,
            initial_temperature: DEFAULT_INITIAL_POINT.0,
            cooling: DEFAULT_INITIAL_POINT.1,
            sweeps: DEFAULT_SWEEPS,
        }
    }

    /// Override the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Override the two-parameter initial point
    /// (initial temperature, cooling rate).
    #[must_use]
    pub fn with_initial_point(mut self, initial_temperature: f64, cooling: f64) -> Self {
        self.initial_temperature = initial_temperature;
        self.cooling = cooling;
        self
    }

    /// Override the number of sweeps.
    #[must_use]
    pub fn with_sweeps(mut self, sweeps: usize) -> Self {
        self.sweeps = sweeps;
        self
    }

    /// Anneal with the given random number generator.
    ///
    /// Exposed for callers that manage their own RNG; `solve` seeds a
    /// `StdRng` from the configured seed.
    pub fn solve_with_rng<R: Rng>(&self, program: &IsingProgram, mut rng: R) -> HalResult<Solution> {
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

        let linear: Vec<f64> = program.linear.iter().map(|(_, c)| c).collect();
        let couplings = coupling_lists(program, n);

        // Random initial assignment, then anneal.
        let mut assignment: Vec<u8> = (0..n).map(|_| u8::from(rng.r#gen::<bool>())).collect();
        let mut value = program.evaluate(&assignment);
        let mut best = Solution::new(value, assignment.clone());
        let mut temperature = self.initial_temperature;

        for _ in 0..self.sweeps {
            for _ in 0..n {
                let pos = rng.gen_range(0..n);
                let delta = flip_delta(pos, &assignment, &linear, &couplings);
                if delta <= 0.0 || rng.r#gen::<f64>() < (-delta / temperature).exp() {
                    assignment[pos] ^= 1;
                    value += delta;
                    if value < best.objective {
                        best = Solution::new(value, assignment.clone());
                    }
                }
            }
            temperature *= self.cooling;
        }

        debug!(
            num_vars = n,
            sweeps = self.sweeps,
            objective = best.objective,
            "annealing complete"
        );
        Ok(best)
    }
}

impl Default for AnnealSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for AnnealSolver {
    fn name(&self) -> &str {
        &self.capabilities.name
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    fn solve(&self, program: &IsingProgram) -> HalResult<Solution> {
        self.solve_with_rng(program, StdRng::seed_from_u64(self.seed))
    }
}

/// Per-position neighbor lists: `couplings[i]` holds `(j, q_ij)` for every
/// quadratic term touching position `i`.
fn coupling_lists(program: &IsingProgram, n: usize) -> Vec<Vec<(usize, f64)>> {
    let mut lists = vec![Vec::new(); n];
    for ((a, b), coeff) in program.quadratic.iter() {
        if let (Some(i), Some(j)) = (program.linear.position_of(a), program.linear.position_of(b)) {
            lists[i].push((j, coeff));
            lists[j].push((i, coeff));
        }
    }
    lists
}

/// Objective change from flipping the bit at `pos`.
///
/// Flipping x → 1−x changes the objective by (1−2x)·(l + Σ_j q·x_j).
fn flip_delta(
    pos: usize,
    assignment: &[u8],
    linear: &[f64],
    couplings: &[Vec<(usize, f64)>],
) -> f64 {
    let sign = 1.0 - 2.0 * assignment[pos] as f64;
    let mut field = linear[pos];
    for &(j, coeff) in &couplings[pos] {
        field += coeff * assignment[j] as f64;
    }
    sign * field
}
