use super::TraceRecord;

/// Event emitted by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event<'a> {
    /// A midpoint was evaluated.
    ///
    /// Emitted before the solver checks for an exact root or narrows the
    /// bracket, whether or not a trace is being recorded.
    Midpoint {
        /// The step, with the bracket before narrowing.
        record: &'a TraceRecord,

        /// Function value at the midpoint.
        value: f64,
    },
}

impl<'a> Event<'a> {
    /// Returns the step this event describes.
    #[must_use]
    pub fn record(&self) -> &'a TraceRecord {
        match self {
            Event::Midpoint { record, .. } => *record,
        }
    }

    /// Returns the function value at the evaluated point.
    #[must_use]
    pub fn value(&self) -> f64 {
        match self {
            Event::Midpoint { value, .. } => *value,
        }
    }
}
