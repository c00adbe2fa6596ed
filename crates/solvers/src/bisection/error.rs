use std::error::Error as StdError;

use thiserror::Error;

use super::{bracket::BracketError, config::ConfigError};

/// Errors that can occur during bisection solving.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("no sign change: f({a})={f_a}, f({b})={f_b}")]
    SameSigns { a: f64, b: f64, f_a: f64, f_b: f64 },

    #[error("non-finite value {value} at x = {x}")]
    NonFiniteValue { x: f64, value: f64 },

    #[error("function evaluation failed at x = {x}")]
    Function {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}
