//! Bisection root finding on a sign-changing bracket.
//!
//! # Algorithm
//!
//! Bisection starts from an interval `[a, b]` on which the function changes
//! sign. By Bolzano's theorem a continuous function has a root inside such an
//! interval. Each iteration evaluates the midpoint `m = (a + b) / 2` and keeps
//! the half that still changes sign: if `f(a)` and `f(m)` share a sign the
//! root lies in `[m, b]`, otherwise in `[a, m]`.
//!
//! The approximate zero is the midpoint of the last bracket. A midpoint whose
//! value is exactly `0.0` ends the run immediately; this is an exact float
//! comparison, not a tolerance check.
//!
//! # Stop policies
//!
//! - [`StopPolicy::Tolerance`] splits while `b - a >= eps`.
//! - [`StopPolicy::FixedCount`] computes the number of splits up front with
//!   [`fixed_iteration_count`] and performs that many. Rounded midpoints can
//!   leave the bracket slightly wider than the exact halving predicts, so the
//!   run keeps splitting while `b - a >= eps`. Both policies visit the same
//!   brackets and end below `eps`; the fixed-count run may take one split more
//!   when rounding narrows the bracket faster than exact halving.
//!
//! Either policy stops with [`Status::PrecisionLimit`] if the bounds become
//! adjacent floats before the target is reached.
//!
//! # Trace
//!
//! When [`Config::records_trace`] is set, the solution carries a [`Trace`]:
//! one [`TraceRecord`] per iteration, holding the bracket before it was
//! narrowed and the midpoint evaluated, plus one final record for the bracket
//! the solver stopped on. Runs ending on an exact root or an observer stop
//! have no final record.
//!
//! # Observer Events
//!
//! Every midpoint evaluation emits an [`Event::Midpoint`]. Observers can
//! return [`Action::StopEarly`] to end the run at that midpoint.

mod action;
mod bracket;
mod config;
mod count;
mod error;
mod event;
mod search;
mod solution;
mod trace;


pub use action::Action;
pub use bracket::{Bracket, BracketError};
pub use config::{Config, ConfigError, StopPolicy};
pub use count::fixed_iteration_count;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};
pub use trace::{Trace, TraceRecord};

use bolzano_core::{Function, Observer};

use search::search;

/// Finds a root of `function` on `bracket` using bisection.
///
/// The observer receives an [`Event`] for each midpoint evaluation.
/// See the [module docs](self) for details on stop policies and traces.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, if `f(a)` and `f(b)` share a
/// strict sign, if the function yields a non-finite value, or if the function
/// itself fails. Function errors are returned as [`Error::Function`] with the
/// original error as the source.
pub fn solve<F, Obs>(
    function: &F,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let bracket = Bracket::new(bracket)?;
    search(function, bracket, config, observer)
}

/// Finds a root without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<F: Function>(
    function: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(function, bracket, config, ())
}

/// Finds a root to within `eps` and returns it with the full trace.
///
/// Uses the tolerance policy.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if `eps` is not a finite positive number,
/// otherwise errors as [`solve`] does.
pub fn find_root<F: Function>(
    function: &F,
    bracket: [f64; 2],
    eps: f64,
) -> Result<(f64, Trace), Error> {
    let config = Config::new(eps)?;
    let solution = solve_unobserved(function, bracket, &config)?;
    Ok((solution.zero, solution.trace.unwrap_or_default()))
}

/// Finds a root to within `eps` using the fixed-count policy, without a trace.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if `eps` is not a finite positive number,
/// otherwise errors as [`solve`] does.
pub fn find_root_fixed_count<F: Function>(
    function: &F,
    bracket: [f64; 2],
    eps: f64,
) -> Result<f64, Error> {
    let config = Config::new(eps)?
        .with_policy(StopPolicy::FixedCount)
        .without_trace();
    Ok(solve_unobserved(function, bracket, &config)?.zero)
}
