//! Rimfax Command-Line Interface
//!
//! The main entry point for the Rimfax tool: read a weighted-graph input
//! file, linearize it into a QUBO, rewrite it into Ising form, and hand the
//! result to a solver backend.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;
mod report;

use commands::{solve, version};

/// Rimfax - QUBO/Ising conversion and solving for weighted graphs
#[derive(Parser)]
#[command(name = "rimfax")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a weighted-graph input file
    Solve {
        /// Input file (weighted-graph text format)
        #[arg(short, long)]
        input: String,

        /// Solver backend (exact, anneal, both)
        #[arg(short, long, default_value = "both")]
        backend: String,

        /// RNG seed for the annealing backend
        #[arg(long, default_value = "10598")]
        seed: u64,

        /// Output file for JSON report (skipped if omitted)
        #[arg(short, long)]
        export: Option<String>,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Solve {
            input,
            backend,
            seed,
            export,
        } => solve::execute(&input, &backend, seed, export.as_deref()),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
