//! Solves three classic root-finding problems with bisection.
//!
//! # Usage
//!
//! ```text
//! cargo run -p bisect-observers --example classic
//! cargo run -p bisect-observers --example classic -- trace
//! RUST_LOG=info cargo run -p bisect-observers --example classic -- verbose
//! ```
//!
//! # Modes
//!
//! - **(none)** — Print each root.
//! - **trace** — Also print every iteration to stdout via [`Trace`].
//! - **verbose** — Log every iteration through `tracing` at `info` level.
//!
//! # Problems
//!
//! - x² − x − 1 on \[1, 2\] — the golden ratio ≈ 1.618034
//! - cos x − x on \[0, 1\] — the Dottie number ≈ 0.739085
//! - eˣ − 5 on \[1, 2\] — ln 5 ≈ 1.609438

use std::error::Error;

use bisect_observers::Trace;
use bisect_solvers::bisection::{self, Config, Solution};
use tracing_subscriber::EnvFilter;

type Problem = (&'static str, fn(f64) -> f64, [f64; 2], f64);

const PROBLEMS: [Problem; 3] = [
    ("x^2 - x - 1", golden, [1.0, 2.0], 1e-6),
    ("cos x = x", dottie, [0.0, 1.0], 1e-8),
    ("e^x = 5", ln_five, [1.0, 2.0], 1e-8),
];

fn golden(x: f64) -> f64 {
    x * x - x - 1.0
}

fn dottie(x: f64) -> f64 {
    x.cos() - x
}

fn ln_five(x: f64) -> f64 {
    x.exp() - 5.0
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mode = std::env::args().nth(1).unwrap_or_default();
    if !matches!(mode.as_str(), "" | "trace" | "verbose") {
        eprintln!("Unknown mode: {mode}");
        eprintln!("Usage: classic [trace|verbose]");
        std::process::exit(1);
    }

    for (label, f, bracket, tolerance) in PROBLEMS {
        let config = Config::new(tolerance, 100)?.with_verbose(mode == "verbose");

        let solution = if mode == "trace" {
            println!("{label}:");
            bisection::solve(f, bracket, &config, Trace::stdout())?
        } else {
            bisection::solve_unobserved(f, bracket, &config)?
        };

        report(label, &solution);
    }

    Ok(())
}

fn report(label: &str, solution: &Solution) {
    println!(
        "Root ({label}) ≈ {:.6} after {} iterations ({:?})",
        solution.x, solution.iters, solution.status
    );
}
