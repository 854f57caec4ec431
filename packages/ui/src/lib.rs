//! This crate contains all shared UI for the workspace.

mod greeting;
pub use greeting::Greeting;

mod counter;
pub use counter::{use_counter, CounterPanel, UseCounter};

mod source;
pub use source::{make_source, use_user_source, SourceHandle};

mod user_profile;
pub use user_profile::UserProfile;

#[cfg(test)]
mod testing;
