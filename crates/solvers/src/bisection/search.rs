use bolzano_core::{Function, Observer};
use tracing::{debug, trace};

use super::{
    Action, Config, Error, Event, Solution, Status, StopPolicy, Trace, TraceRecord,
    bracket::{Bracket, same_sign},
    fixed_iteration_count,
};

/// Core bisection loop shared by both stop policies.
///
/// The tolerance policy splits while `b - a >= eps`; the fixed-count policy
/// splits [`fixed_iteration_count`] times, then keeps splitting while rounded
/// midpoints have left the bracket at least `eps` wide. Everything else,
/// including trace recording, is identical.
pub(super) fn search<F, Obs>(
    function: &F,
    mut bracket: Bracket,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let mut f_a = evaluate(function, bracket.a())?;
    let f_b = evaluate(function, bracket.b())?;

    if same_sign(f_a, f_b) {
        debug!(
            a = bracket.a(),
            b = bracket.b(),
            f_a,
            f_b,
            "bisection rejected: no sign change"
        );
        return Err(Error::SameSigns {
            a: bracket.a(),
            b: bracket.b(),
            f_a,
            f_b,
        });
    }

    let limit = match config.policy() {
        StopPolicy::Tolerance => None,
        StopPolicy::FixedCount => Some(fixed_iteration_count(bracket.as_array(), config.eps())),
    };

    let mut trace = config.records_trace().then(Trace::default);
    let mut iter = 0;

    let status = loop {
        let should_split = match limit {
            None => bracket.width() >= config.eps(),
            Some(n) => iter < n || bracket.width() >= config.eps(),
        };
        if !should_split {
            break Status::Converged;
        }

        let m = bracket.midpoint();
        if !bracket.is_interior(m) {
            break Status::PrecisionLimit;
        }

        let f_m = evaluate(function, m)?;
        let record = step_record(iter, &bracket, m);
        trace!(
            iter,
            a = record.a,
            m,
            b = record.b,
            width = record.width,
            f_m,
            "bisection step"
        );
        if let Some(trace) = trace.as_mut() {
            trace.push(record);
        }

        let event = Event::Midpoint {
            record: &record,
            value: f_m,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(finish(Status::StoppedByObserver, m, iter + 1, trace));
        }

        #[allow(clippy::float_cmp)]
        if f_m == 0.0 {
            return Ok(finish(Status::ExactRoot, m, iter + 1, trace));
        }

        if same_sign(f_a, f_m) {
            bracket.raise_left(m);
            f_a = f_m;
        } else {
            bracket.lower_right(m);
        }

        iter += 1;
    };

    let m = bracket.midpoint();
    if let Some(trace) = trace.as_mut() {
        trace.push(step_record(iter, &bracket, m));
    }

    Ok(finish(status, m, iter, trace))
}

/// Evaluates the function, rejecting errors and non-finite values.
fn evaluate<F: Function>(function: &F, x: f64) -> Result<f64, Error> {
    let value = function.call(x).map_err(|source| Error::Function {
        x,
        source: Box::new(source),
    })?;

    if !value.is_finite() {
        return Err(Error::NonFiniteValue { x, value });
    }

    Ok(value)
}

fn step_record(iter: usize, bracket: &Bracket, m: f64) -> TraceRecord {
    TraceRecord {
        iter,
        a: bracket.a(),
        m,
        b: bracket.b(),
        width: bracket.width(),
    }
}

fn finish(status: Status, zero: f64, iters: usize, trace: Option<Trace>) -> Solution {
    debug!(?status, zero, iters, "bisection finished");
    Solution {
        status,
        zero,
        iters,
        trace,
    }
}
