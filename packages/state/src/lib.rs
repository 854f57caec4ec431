pub mod config;
pub mod counter;
pub mod error;
pub mod greeting;
pub mod models;
pub mod observable;
pub mod profile;
pub mod source;

mod memory;
pub use memory::MemoryUserSource;

pub use config::ClientConfig;
pub use counter::{Counter, CounterAction};
pub use error::FetchError;
pub use greeting::{salutation, DEFAULT_NAME};
pub use models::{UserId, UserRecord};
pub use observable::{Observable, SubscriptionId};
pub use profile::{ProfileLoader, ProfileState};
pub use source::UserSource;
