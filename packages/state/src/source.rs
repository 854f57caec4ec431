//! Where user records come from.

use crate::error::FetchError;
use crate::models::{UserId, UserRecord};

/// Async source of user records.
///
/// Implementations are [`crate::MemoryUserSource`] (tests and offline use) and
/// `api::HttpUserSource`. Futures are not required to be `Send` so that WASM
/// backends can implement the trait.
pub trait UserSource {
    fn fetch_user(
        &self,
        id: UserId,
    ) -> impl std::future::Future<Output = Result<UserRecord, FetchError>>;
}
