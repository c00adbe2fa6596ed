/// Receives solver events and decides how the iteration should proceed.
///
/// The `observe` method returns `Option<A>`, where `Some(action)` requests a
/// solver-specific action and `None` lets the solver continue unchanged.
///
/// Closures automatically implement `Observer`, and `()` is a no-op observer
/// that always returns `None`.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive<O: Observer<usize, &'static str>>(mut observer: O, events: usize) -> Option<usize> {
        (0..events).find(|event| observer.observe(event).is_some())
    }

    #[test]
    fn unit_never_acts() {
        assert_eq!(drive((), 10), None);
    }

    #[test]
    fn closure_can_request_action() {
        let mut seen = 0;
        let stop_at_three = |event: &usize| {
            seen += 1;
            (*event == 3).then_some("stop")
        };
        assert_eq!(drive(stop_at_three, 10), Some(3));
        assert_eq!(seen, 4);
    }
}
