//! Solve command implementation.

use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use rimfax_adapter_anneal::AnnealSolver;
use rimfax_adapter_exact::ExactSolver;
use rimfax_hal::{Solution, Solver};
use rimfax_qubo::{IsingProgram, linearize, to_ising};

use crate::report::{BackendResult, SolveReport};

/// Execute the solve command.
pub fn execute(input: &str, backend: &str, seed: u64, export: Option<&str>) -> Result<()> {
    let (run_anneal, run_exact) = match backend.to_lowercase().as_str() {
        "exact" => (false, true),
        "anneal" => (true, false),
        "both" => (true, true),
        other => {
            anyhow::bail!("Unknown backend: '{other}'. Available: exact, anneal, both");
        }
    };

    println!(
        "{} Solving {} on {}",
        style("→").cyan().bold(),
        style(input).green(),
        style(backend).yellow()
    );

    // Read the input file and run the two local transforms.
    let problem = rimfax_dimacs::read_weights(input)?;
    println!(
        "  Loaded: {} nodes, {} edges declared, {} weight entries",
        problem.num_nodes,
        problem.num_edges,
        problem.weights.len()
    );

    let qubo = linearize(&problem.weights, problem.num_nodes);
    let ising = to_ising(qubo);
    println!(
        "  Converted: {} variables, {} quadratic terms, offset {}",
        ising.num_vars(),
        ising.quadratic.len(),
        ising.offset
    );

    debug!(run_anneal, run_exact, seed, "selected solver backends");
    let mut report = SolveReport::new(input, &problem, &ising);

    // Approximate block first, classical block last.
    if run_anneal {
        let solver = AnnealSolver::new().with_seed(seed);
        let solution = run_solver(&solver, &ising)?;
        println!("approximate annealing results:");
        println!("{}", solution.energy(ising.offset));
        println!("{}", solution.sign_string());
        report.push(BackendResult::new(&solver, &solution, ising.offset));
    }

    if run_exact {
        let solver = ExactSolver::new();
        let solution = run_solver(&solver, &ising)?;
        println!("classical numerical results:");
        println!("{}", solution.energy(ising.offset));
        println!("{}", solution.sign_string());
        report.push(BackendResult::new(&solver, &solution, ising.offset));
    }

    if let Some(path) = export {
        crate::report::to_file(&report, std::path::Path::new(path))?;
        println!("  Report written to {}", style(path).green());
    }

    Ok(())
}

/// Run one solver with a spinner; a one-shot blocking call.
fn run_solver<S: Solver>(solver: &S, ising: &IsingProgram) -> Result<Solution> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message(format!("Running {} solver...", solver.name()));
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let solution = solver.solve(ising)?;
    spinner.finish_and_clear();
    Ok(solution)
}
