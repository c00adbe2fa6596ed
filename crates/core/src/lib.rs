//! Core traits for the Bolzano root finders.
//!
//! This crate defines the shared abstractions that solvers build on:
//!
//! - [`Function`] — a scalar function `f64 -> f64` supplied by the caller,
//!   whose evaluation may fail
//! - [`Observer`] — receives solver events and optionally returns control actions
//!
//! Solvers never construct functions themselves. How a [`Function`] came to
//! be (a closure, a compiled expression, a lookup table) is the caller's
//! business; the solver only calls it.

mod function;
mod observer;

pub use function::{FromFn, Function, TryFromFn, from_fn, try_from_fn};
pub use observer::Observer;
