//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - QUBO/Ising conversion and solving for weighted graphs",
        style("Rimfax").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  rimfax-qubo    Graph linearizer and QUBO/Ising converter");
    println!("  rimfax-dimacs  Weighted-graph input reader");
    println!("  rimfax-hal     Solver abstraction layer");
    println!("  rimfax-cli     Command-line interface");
    println!();
    println!(
        "Repository: {}",
        style("https://github.com/rimfax-lab/rimfax").underlined()
    );
    println!("License:    {}", style("Apache-2.0").dim());
}
