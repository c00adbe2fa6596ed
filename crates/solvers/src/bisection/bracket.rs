use thiserror::Error;

/// Errors that can occur when creating a [`Bracket`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,

    /// The left endpoint is greater than the right endpoint.
    #[error("left endpoint is greater than right endpoint")]
    Reversed,
}

/// The interval `[a, b]` known to contain a root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    a: f64,
    b: f64,
}

impl Bracket {
    /// Creates a bracket from `[a, b]`.
    ///
    /// A zero-width bracket (`a == b`) is allowed.
    ///
    /// # Errors
    ///
    /// Returns `BracketError` if an endpoint is non-finite or `a > b`.
    pub fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [a, b] = bracket;

        if !a.is_finite() || !b.is_finite() {
            return Err(BracketError::NonFinite);
        }

        if a > b {
            return Err(BracketError::Reversed);
        }

        Ok(Self { a, b })
    }

    /// Returns the left bound.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Returns the right bound.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Returns the bracket bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.a, self.b]
    }

    /// Returns the midpoint `(a + b) / 2`.
    ///
    /// Falls back to `a / 2 + b / 2` when the sum overflows.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        let m = (self.a + self.b) / 2.0;
        if m.is_finite() {
            m
        } else {
            self.a / 2.0 + self.b / 2.0
        }
    }

    /// Returns the bracket width `b - a`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.b - self.a
    }

    /// Returns true if `x` lies strictly inside the bracket.
    ///
    /// A midpoint that fails this check means the bounds are adjacent floats.
    #[must_use]
    pub fn is_interior(&self, x: f64) -> bool {
        self.a < x && x < self.b
    }

    /// Replaces the left bound with `m`.
    pub(super) fn raise_left(&mut self, m: f64) {
        self.a = m;
    }

    /// Replaces the right bound with `m`.
    pub(super) fn lower_right(&mut self, m: f64) {
        self.b = m;
    }
}

/// Returns true if `x` and `y` are both strictly positive or both strictly
/// negative.
///
/// A zero on either side counts as a sign change.
pub(super) fn same_sign(x: f64, y: f64) -> bool {
    (x > 0.0 && y > 0.0) || (x < 0.0 && y < 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn rejects_non_finite() {
        assert_eq!(Bracket::new([f64::NAN, 1.0]), Err(BracketError::NonFinite));
        assert_eq!(
            Bracket::new([0.0, f64::INFINITY]),
            Err(BracketError::NonFinite)
        );
    }

    #[test]
    fn rejects_reversed() {
        assert_eq!(Bracket::new([3.0, 1.0]), Err(BracketError::Reversed));
    }

    #[test]
    fn allows_zero_width() {
        let bracket = Bracket::new([2.0, 2.0]).expect("valid bracket");
        assert_relative_eq!(bracket.width(), 0.0);
        assert_relative_eq!(bracket.midpoint(), 2.0);
    }

    #[test]
    fn narrows_from_either_side() {
        let mut bracket = Bracket::new([0.0, 2.0]).expect("valid bracket");

        bracket.raise_left(1.0);
        assert_eq!(bracket.as_array(), [1.0, 2.0]);

        bracket.lower_right(1.5);
        assert_eq!(bracket.as_array(), [1.0, 1.5]);
        assert_relative_eq!(bracket.width(), 0.5);
    }

    #[test]
    fn midpoint_survives_overflowing_sum() {
        let bracket = Bracket::new([1e308, 1.5e308]).expect("valid bracket");
        let m = bracket.midpoint();
        assert!(bracket.is_interior(m));
        assert_relative_eq!(m, 1.25e308, max_relative = 1e-15);
    }

    #[test]
    fn adjacent_floats_have_no_interior() {
        let a = 1.0_f64;
        let b = f64::from_bits(a.to_bits() + 1);
        let bracket = Bracket::new([a, b]).expect("valid bracket");
        assert!(!bracket.is_interior(bracket.midpoint()));
    }

    #[test]
    fn zero_is_not_a_sign() {
        assert!(same_sign(1.0, 2.0));
        assert!(same_sign(-1.0, -0.5));
        assert!(!same_sign(-1.0, 2.0));
        assert!(!same_sign(0.0, 2.0));
        assert!(!same_sign(-3.0, -0.0));
    }

    #[test]
    fn tiny_same_sign_values_do_not_underflow() {
        // The product of these underflows to zero.
        assert!(same_sign(1e-200, 1e-200));
    }
}
