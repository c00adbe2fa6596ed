use super::Trace;

/// Why the solver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The stop policy was satisfied.
    Converged,

    /// A midpoint evaluated to exactly zero.
    ExactRoot,

    /// The bracket bounds are adjacent floats and cannot be split further.
    PrecisionLimit,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a bisection solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Approximate zero: the midpoint of the last bracket.
    pub zero: f64,

    /// Number of midpoints evaluated inside the loop.
    pub iters: usize,

    /// Brackets examined, if the config records a trace.
    pub trace: Option<Trace>,
}
