//! CLI argument parsing and end-to-end pipeline tests.
//!
//! The CLI is a binary crate, so clap parsing is validated on a mirrored
//! struct and the pipeline is exercised through the underlying crates.

// ============================================================================
// Clap argument parsing (test via try_parse_from on equivalent structs)
// ============================================================================

mod clap_parsing {
    use clap::{Parser, Subcommand};

    // Mirror the CLI struct for testing (since main.rs is a binary)
    #[derive(Parser)]
    #[command(name = "rimfax")]
    struct TestCli {
        #[arg(short, long, action = clap::ArgAction::Count, global = true)]
        verbose: u8,

        #[command(subcommand)]
        command: TestCommands,
    }

    #[derive(Subcommand)]
    enum TestCommands {
        Solve {
            #[arg(short, long)]
            input: String,
            #[arg(short, long, default_value = "both")]
            backend: String,
            #[arg(long, default_value = "10598")]
            seed: u64,
            #[arg(short, long)]
            export: Option<String>,
        },
        Version,
    }

    #[test]
    fn test_parse_solve_minimal() {
        let cli = TestCli::try_parse_from(["rimfax", "solve", "-i", "inputs.txt"]).unwrap();
        match cli.command {
            TestCommands::Solve {
                input,
                backend,
                seed,
                export,
            } => {
                assert_eq!(input, "inputs.txt");
                assert_eq!(backend, "both");
                assert_eq!(seed, 10598);
                assert!(export.is_none());
            }
            TestCommands::Version => panic!("Expected Solve command"),
        }
    }

    #[test]
    fn test_parse_solve_with_all_args() {
        let cli = TestCli::try_parse_from([
            "rimfax",
            "solve",
            "-i",
            "inputs.txt",
            "-b",
            "exact",
            "--seed",
            "7",
            "-e",
            "report.json",
        ])
        .unwrap();
        match cli.command {
            TestCommands::Solve {
                backend,
                seed,
                export,
                ..
            } => {
                assert_eq!(backend, "exact");
                assert_eq!(seed, 7);
                assert_eq!(export.unwrap(), "report.json");
            }
            TestCommands::Version => panic!("Expected Solve command"),
        }
    }

    #[test]
    fn test_parse_solve_missing_input() {
        let result = TestCli::try_parse_from(["rimfax", "solve"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_version() {
        let cli = TestCli::try_parse_from(["rimfax", "version"]).unwrap();
        assert!(matches!(cli.command, TestCommands::Version));
    }

    #[test]
    fn test_parse_verbose_flags() {
        let cli = TestCli::try_parse_from(["rimfax", "-vv", "version"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_no_subcommand() {
        let result = TestCli::try_parse_from(["rimfax"]);
        assert!(result.is_err());
    }
}

// ============================================================================
// End-to-end pipeline over a real input file
// ============================================================================

mod pipeline {
    use std::fs;

    use rimfax_adapter_anneal::AnnealSolver;
    use rimfax_adapter_exact::ExactSolver;
    use rimfax_hal::Solver;
    use rimfax_qubo::{Var, linearize, to_ising};

    const SAMPLE: &str = "c sample weighted graph\nc two edges, three nodes\nI p 3 2\n0 1 5\n1 2 3\n";

    #[test]
    fn test_file_to_solution() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inputs.txt");
        fs::write(&path, SAMPLE).unwrap();

        let problem = rimfax_dimacs::read_weights(&path).unwrap();
        assert_eq!(problem.num_nodes, 3);
        assert_eq!(problem.num_edges, 2);

        let ising = to_ising(linearize(&problem.weights, problem.num_nodes));
        assert_eq!(ising.offset, 8.0);
        assert_eq!(ising.quadratic.get(Var(0), Var(1)), Some(20.0));
        assert_eq!(ising.quadratic.get(Var(1), Var(2)), Some(12.0));

        let exact = ExactSolver::new().solve(&ising).unwrap();
        // Path graph 0-1-2, weights 5 and 3: cut both edges by flipping node
        // 1 against its neighbors. Energy = -5 - 3 = -8.
        assert_eq!(exact.energy(ising.offset), -8.0);
        let spins = exact.spins();
        assert_ne!(spins[0], spins[1]);
        assert_ne!(spins[1], spins[2]);

        let approx = AnnealSolver::new().solve(&ising).unwrap();
        assert_eq!(approx.energy(ising.offset), -8.0);
    }

    #[test]
    fn test_malformed_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, "I p 2 1\n0 oops 5\n").unwrap();
        assert!(rimfax_dimacs::read_weights(&path).is_err());
    }

    #[test]
    fn test_missing_file_fails() {
        let result = rimfax_dimacs::read_weights("/tmp/rimfax_test_nonexistent_12345.txt");
        assert!(result.is_err());
    }
}
