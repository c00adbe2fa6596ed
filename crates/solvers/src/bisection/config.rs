use thiserror::Error;

/// How the solver decides when to stop subdividing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopPolicy {
    /// Subdivide while the bracket width is at least `eps`.
    #[default]
    Tolerance,

    /// Subdivide a fixed number of times, computed up front from the initial
    /// bracket width and `eps` by [`fixed_iteration_count`], then continue
    /// while the bracket is still at least `eps` wide.
    ///
    /// [`fixed_iteration_count`]: super::fixed_iteration_count
    FixedCount,
}

/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    eps: f64,
    policy: StopPolicy,
    records_trace: bool,
}

/// Errors that can occur when validating a bisection solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("eps must be greater than zero")]
    NonPositiveEps,

    #[error("eps must be finite")]
    NonFiniteEps,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good value, unwrap is safe
        Self::new(1e-12).unwrap()
    }
}

impl Config {
    /// Creates a tolerance-driven config that records a trace.
    ///
    /// # Errors
    ///
    /// Returns an error if `eps` is not a finite positive number.
    pub fn new(eps: f64) -> Result<Self, ConfigError> {
        if eps.is_nan() || eps.is_infinite() {
            return Err(ConfigError::NonFiniteEps);
        }
        if eps <= 0.0 {
            return Err(ConfigError::NonPositiveEps);
        }

        Ok(Self {
            eps,
            policy: StopPolicy::Tolerance,
            records_trace: true,
        })
    }

    /// Sets the stop policy.
    #[must_use]
    pub fn with_policy(mut self, policy: StopPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Disables trace collection.
    #[must_use]
    pub fn without_trace(mut self) -> Self {
        self.records_trace = false;
        self
    }

    /// Returns the target bracket width.
    #[must_use]
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Returns the stop policy.
    #[must_use]
    pub fn policy(&self) -> StopPolicy {
        self.policy
    }

    /// Returns true if the solver records a trace.
    #[must_use]
    pub fn records_trace(&self) -> bool {
        self.records_trace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_eps() {
        assert_eq!(Config::new(0.0), Err(ConfigError::NonPositiveEps));
        assert_eq!(Config::new(-1e-3), Err(ConfigError::NonPositiveEps));
    }

    #[test]
    fn rejects_non_finite_eps() {
        assert_eq!(Config::new(f64::NAN), Err(ConfigError::NonFiniteEps));
        assert_eq!(Config::new(f64::INFINITY), Err(ConfigError::NonFiniteEps));
    }

    #[test]
    fn builder_sets_policy_and_trace() {
        let config = Config::new(1e-6)
            .expect("valid eps")
            .with_policy(StopPolicy::FixedCount)
            .without_trace();

        assert_eq!(config.policy(), StopPolicy::FixedCount);
        assert!(!config.records_trace());
        assert!((config.eps() - 1e-6).abs() < f64::EPSILON);
    }

    #[test]
    fn default_is_tolerance_with_trace() {
        let config = Config::default();
        assert_eq!(Ok(config), Config::new(1e-12));
        assert_eq!(config.policy(), StopPolicy::Tolerance);
        assert!(config.records_trace());
    }
}
