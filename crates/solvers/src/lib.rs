//! Bracketing root finders for scalar functions.
//!
//! A [`Function`] is evaluated on an interval where it changes sign, and the
//! interval is narrowed until it is smaller than a target width.
//!
//! # Solvers
//!
//! - [`bisection`] — guaranteed convergence on a bracketed interval, with an
//!   optional trace of every bracket examined
//!
//! # Example
//!
//! ```
//! use bolzano_core::from_fn;
//! use bolzano_solvers::bisection;
//!
//! let f = from_fn(|x| x * x - 2.0);
//! let (zero, trace) = bisection::find_root(&f, [1.0, 2.0], 1e-4)?;
//!
//! assert!((zero - std::f64::consts::SQRT_2).abs() < 1e-4);
//! assert!(trace.last().is_some_and(|r| r.width < 1e-4));
//! # Ok::<(), bisection::Error>(())
//! ```
//!
//! [`Function`]: bolzano_core::Function

pub mod bisection;
