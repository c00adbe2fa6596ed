use std::{convert::Infallible, error::Error as StdError};

/// A scalar function evaluated by a root finder.
///
/// Evaluation is fallible: a function may be undefined at some points (a
/// logarithm of a negative number, a lookup outside a table). Solvers pass
/// such errors back to the caller untouched.
pub trait Function {
    type Error: StdError + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the function cannot be evaluated at `x`.
    fn call(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<T> Function for &T
where
    T: Function + ?Sized,
{
    type Error = T::Error;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        (**self).call(x)
    }
}

/// A [`Function`] backed by an infallible closure.
///
/// Created with [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F>(F);

/// Wraps an infallible closure as a [`Function`].
///
/// ```
/// use bolzano_core::{Function, from_fn};
///
/// let f = from_fn(|x| x * x - 2.0);
/// assert_eq!(f.call(2.0), Ok(2.0));
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn(f64) -> f64,
{
    FromFn(f)
}

impl<F> Function for FromFn<F>
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Infallible> {
        Ok((self.0)(x))
    }
}

/// A [`Function`] backed by a fallible closure.
///
/// Created with [`try_from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct TryFromFn<F>(F);

/// Wraps a fallible closure as a [`Function`].
pub fn try_from_fn<F, E>(f: F) -> TryFromFn<F>
where
    F: Fn(f64) -> Result<f64, E>,
    E: StdError + Send + Sync + 'static,
{
    TryFromFn(f)
}

impl<F, E> Function for TryFromFn<F>
where
    F: Fn(f64) -> Result<f64, E>,
    E: StdError + Send + Sync + 'static,
{
    type Error = E;

    fn call(&self, x: f64) -> Result<f64, E> {
        (self.0)(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use thiserror::Error;

    #[derive(Debug, Error, PartialEq)]
    #[error("undefined at {0}")]
    struct Undefined(f64);

    /// Natural logarithm, undefined for non-positive inputs.
    struct Ln;

    impl Function for Ln {
        type Error = Undefined;

        fn call(&self, x: f64) -> Result<f64, Undefined> {
            if x > 0.0 { Ok(x.ln()) } else { Err(Undefined(x)) }
        }
    }

    fn eval_twice<F: Function>(f: F, x: f64) -> Result<f64, F::Error> {
        Ok(f.call(x)? + f.call(x)?)
    }

    #[test]
    fn from_fn_calls_closure() {
        let f = from_fn(|x| 3.0 * x + 1.0);
        assert_relative_eq!(f.call(2.0).unwrap(), 7.0);
    }

    #[test]
    fn try_from_fn_passes_errors_through() {
        let f = try_from_fn(|x: f64| if x < 0.0 { Err(Undefined(x)) } else { Ok(x.sqrt()) });
        assert_relative_eq!(f.call(4.0).unwrap(), 2.0);
        assert_eq!(f.call(-1.0), Err(Undefined(-1.0)));
    }

    #[test]
    fn references_are_functions() {
        let ln = Ln;
        assert_relative_eq!(eval_twice(&ln, 1.0).unwrap(), 0.0);
        assert_eq!(eval_twice(&ln, 0.0), Err(Undefined(0.0)));
    }
}
