//! # Observable values
//!
//! [`Observable`] is a plain value container with change notification. It is the
//! framework-free counterpart of a Dioxus signal: the counter and the profile
//! loader keep their state in one, and the UI layer subscribes a signal to it so
//! that every replacement triggers a re-render.
//!
//! Subscribers are `FnMut(&T)` callbacks invoked in registration order after the
//! new value is stored. Everything here is single-threaded; callbacks need not be
//! `Send`.

use std::fmt;

/// Handle returned by [`Observable::subscribe`], used to cancel a subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber<T> = Box<dyn FnMut(&T)>;

/// A value plus the callbacks interested in its changes.
pub struct Observable<T> {
    value: T,
    subscribers: Vec<(SubscriptionId, Subscriber<T>)>,
    next_id: u64,
}

impl<T> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Store a new value and notify every subscriber.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.notify();
    }

    /// Replace the value with the result of a transition on the current one.
    pub fn update(&mut self, transition: impl FnOnce(&T) -> T) {
        let next = transition(&self.value);
        self.set(next);
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns `false` if the id was never registered or is already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    #[cfg(test)]
    fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn notify(&mut self) {
        for (_, callback) in self.subscribers.iter_mut() {
            callback(&self.value);
        }
    }
}

impl<T: Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
