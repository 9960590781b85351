//! `fuzz-hermitian`: run an invariant check over every small `(a, b, p, q)`.
//!
//! **Usage:**
//! ```text
//! fuzz-hermitian [--max-n N] [--max-p P] [--min-a A] [--min-b B]
//!                [--experiment group|symmetry|matrix] [--config bounds.json] [--json]
//! ```
//!
//! Prints one line per parameter tuple and exits non-zero if any check fails.
//! Log verbosity follows `RUST_LOG` (default `warn`).

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use hermitian_invariants::experiments::{Experiment, ExperimentReport};
use hermitian_invariants::fuzz::{run_experiment_with_fuzzed_parameters, FuzzBounds, GroupParameters};
use tracing_subscriber::EnvFilter;

/// Sweep group parameters and check invariant properties.
#[derive(Parser)]
#[command(name = "fuzz-hermitian", version, about)]
struct Args {
    /// Largest dimension n = a + b.
    #[arg(long, default_value_t = 2)]
    max_n: usize,

    /// Largest group order p.
    #[arg(long, default_value_t = 3)]
    max_p: u32,

    /// Smallest a.
    #[arg(long, default_value_t = 0)]
    min_a: usize,

    /// Smallest b.
    #[arg(long, default_value_t = 0)]
    min_b: usize,

    /// Check to run at every point: group, symmetry or matrix.
    #[arg(long, default_value = "symmetry")]
    experiment: Experiment,

    /// Read the bounds from a JSON file instead of the flags above.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print one JSON report per line.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let bounds = match &args.config {
        Some(path) => FuzzBounds::from_json_file(path)
            .with_context(|| format!("loading bounds from {}", path.display()))?,
        None => FuzzBounds::new(args.max_n, args.max_p)
            .with_min_a(args.min_a)
            .with_min_b(args.min_b),
    };

    let mut reports: Vec<ExperimentReport> = Vec::new();
    run_experiment_with_fuzzed_parameters(
        |a, b, p, q| {
            let params = GroupParameters { a, b, p, q: q.to_vec() };
            reports.push(args.experiment.report(&params));
        },
        &bounds,
    )?;

    for report in &reports {
        if args.json {
            println!("{}", serde_json::to_string(report)?);
        } else {
            println!("{}", report);
        }
    }

    let failed = reports.iter().filter(|r| !r.passed).count();
    if !args.json {
        println!();
        println!(
            "{} checks, {} passed, {} failed",
            reports.len(),
            reports.len() - failed,
            failed
        );
    }

    if failed > 0 {
        process::exit(1);
    }
    Ok(())
}
