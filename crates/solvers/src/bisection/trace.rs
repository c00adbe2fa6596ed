/// One step of a bisection run.
///
/// The bounds and width are those of the bracket *before* the step narrowed
/// it, so `m` always lies within `[a, b]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceRecord {
    /// Zero-based iteration index.
    pub iter: usize,

    /// Left bound.
    pub a: f64,

    /// Midpoint evaluated at this step.
    pub m: f64,

    /// Right bound.
    pub b: f64,

    /// Bracket width `b - a`.
    pub width: f64,
}

/// The ordered record of brackets examined during a run.
///
/// Holds one record per iteration performed, followed by one final record for
/// the bracket the solver stopped on. A run that ends on an exact root (or is
/// stopped by an observer) has no final record: its last record is the step
/// that ended it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    records: Vec<TraceRecord>,
}

impl Trace {
    pub(super) fn push(&mut self, record: TraceRecord) {
        self.records.push(record);
    }

    /// Returns the records in iteration order.
    #[must_use]
    pub fn records(&self) -> &[TraceRecord] {
        &self.records
    }

    /// Returns the last record, the tightest bracket examined.
    #[must_use]
    pub fn last(&self) -> Option<&TraceRecord> {
        self.records.last()
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the trace holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns an iterator over the records.
    pub fn iter(&self) -> std::slice::Iter<'_, TraceRecord> {
        self.records.iter()
    }

    /// Consumes the trace, returning its records.
    #[must_use]
    pub fn into_records(self) -> Vec<TraceRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TraceRecord;
    type IntoIter = std::slice::Iter<'a, TraceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for Trace {
    type Item = TraceRecord;
    type IntoIter = std::vec::IntoIter<TraceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(iter: usize, a: f64, b: f64) -> TraceRecord {
        TraceRecord {
            iter,
            a,
            m: (a + b) / 2.0,
            b,
            width: b - a,
        }
    }

    #[test]
    fn keeps_insertion_order() {
        let mut trace = Trace::default();
        assert!(trace.is_empty());

        trace.push(record(0, 0.0, 4.0));
        trace.push(record(1, 0.0, 2.0));
        trace.push(record(2, 1.0, 2.0));

        assert_eq!(trace.len(), 3);
        let iters: Vec<usize> = trace.iter().map(|r| r.iter).collect();
        assert_eq!(iters, vec![0, 1, 2]);
        assert_eq!(trace.last(), Some(&record(2, 1.0, 2.0)));
    }

    #[test]
    fn into_records_returns_everything() {
        let mut trace = Trace::default();
        trace.push(record(0, -1.0, 1.0));

        let records = trace.clone().into_records();
        assert_eq!(records, trace.records());
    }
}
