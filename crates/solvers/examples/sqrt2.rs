//! Finds √2 as the root of x² − 2 on [1, 2] and prints every bracket examined.
//!
//! # Usage
//!
//! ```text
//! cargo run --example sqrt2
//! cargo run --example sqrt2 -- 1e-9
//! RUST_LOG=bolzano_solvers=trace cargo run --example sqrt2
//! ```
//!
//! The optional argument is the target bracket width (default `1e-6`).

use std::error::Error;

use bolzano_core::{Function, from_fn};
use bolzano_solvers::bisection::{self, Config, StopPolicy};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let eps = std::env::args()
        .nth(1)
        .as_deref()
        .map(str::parse::<f64>)
        .transpose()?
        .unwrap_or(1e-6);

    let f = from_fn(|x| x * x - 2.0);
    let config = Config::new(eps)?;
    let solution = bisection::solve_unobserved(&f, [1.0, 2.0], &config)?;

    for record in solution.trace.iter().flatten() {
        println!(
            "{:>3}  a = {:<20}  m = {:<20}  b = {:<20}  b - a = {:e}",
            record.iter, record.a, record.m, record.b, record.width
        );
    }

    let digits = decimal_places(eps);
    let zero = solution.zero;
    println!("x0 = {zero:.digits$} ± {eps} ({:?})", solution.status);
    println!("f(x0) = {:e}", f.call(zero)?);

    let fixed = bisection::find_root_fixed_count(&f, [1.0, 2.0], eps)?;
    println!(
        "{:?} policy agrees: {}",
        StopPolicy::FixedCount,
        (fixed - zero).abs() < eps
    );

    Ok(())
}

/// Number of decimals worth printing for a result accurate to `eps`.
fn decimal_places(eps: f64) -> usize {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let digits = eps.log10().abs().floor() as usize;
    digits
}
