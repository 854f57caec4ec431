//! Integer counter state unit.

use crate::observable::{Observable, SubscriptionId};

/// The two transitions a [`Counter`] accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterAction {
    Increment,
    Decrement,
}

impl CounterAction {
    /// Compute the next value. Wraps at the `i64` limits so that any sequence of
    /// increments and decrements composes additively.
    pub fn apply(self, value: i64) -> i64 {
        match self {
            CounterAction::Increment => value.wrapping_add(1),
            CounterAction::Decrement => value.wrapping_sub(1),
        }
    }
}

/// An integer value that only changes through [`CounterAction`]s.
#[derive(Debug, Default)]
pub struct Counter {
    value: Observable<i64>,
}

impl Counter {
    /// Create a counter starting at `initial`, or 0 when omitted.
    pub fn new(initial: Option<i64>) -> Self {
        Self {
            value: Observable::new(initial.unwrap_or_default()),
        }
    }

    pub fn value(&self) -> i64 {
        *self.value.get()
    }

    pub fn dispatch(&mut self, action: CounterAction) {
        self.value.update(|v| action.apply(*v));
        tracing::trace!(?action, value = self.value(), "counter updated");
    }

    pub fn increment(&mut self) {
        self.dispatch(CounterAction::Increment);
    }

    pub fn decrement(&mut self) {
        self.dispatch(CounterAction::Decrement);
    }

    /// Register a callback run with the new value after every transition.
    pub fn subscribe(&mut self, callback: impl FnMut(&i64) + 'static) -> SubscriptionId {
        self.value.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.value.unsubscribe(id)
    }
}
