//! Counter hook and its display component.

use dioxus::prelude::*;
use state::Counter;

/// Handle returned by [`use_counter`]. Copy it into event handlers freely; every
/// copy drives the same counter and components reading it re-render on change.
#[derive(Clone, Copy)]
pub struct UseCounter {
    counter: Signal<Counter>,
}

impl UseCounter {
    pub fn count(&self) -> i64 {
        self.counter.read().value()
    }

    pub fn increment(&mut self) {
        self.counter.write().increment();
    }

    pub fn decrement(&mut self) {
        self.counter.write().decrement();
    }
}

/// Component-local counter starting at `initial_value` (0 when `None`).
pub fn use_counter(initial_value: Option<i64>) -> UseCounter {
    let counter = use_signal(|| Counter::new(initial_value));
    UseCounter { counter }
}

#[component]
pub fn CounterPanel(initial_value: Option<i64>) -> Element {
    let mut counter = use_counter(initial_value);
    let count = counter.count();

    rsx! {
        div {
            class: "counter flex items-center gap-2",
            button {
                class: "counter-button",
                onclick: move |_| counter.decrement(),
                "-"
            }
            span { class: "counter-value", "{count}" }
            button {
                class: "counter-button",
                onclick: move |_| counter.increment(),
                "+"
            }
        }
    }
}
