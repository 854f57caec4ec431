use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::FetchError;
use crate::models::{UserId, UserRecord};
use crate::source::UserSource;

/// In-memory UserSource for testing and offline rendering.
///
/// Clones share the same records and fetch counter.
#[derive(Clone, Debug, Default)]
pub struct MemoryUserSource {
    users: Arc<Mutex<HashMap<UserId, UserRecord>>>,
    failures: Arc<Mutex<HashMap<UserId, FetchError>>>,
    fetches: Arc<Mutex<Vec<UserId>>>,
}

impl MemoryUserSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, user: UserRecord) -> Self {
        self.insert(user);
        self
    }

    pub fn insert(&self, user: UserRecord) {
        self.users.lock().unwrap().insert(user.id, user);
    }

    /// Make every fetch of `id` fail with `error`.
    pub fn fail_with(&self, id: UserId, error: FetchError) {
        self.failures.lock().unwrap().insert(id, error);
    }

    /// Ids requested so far, in call order.
    pub fn fetched(&self) -> Vec<UserId> {
        self.fetches.lock().unwrap().clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.lock().unwrap().len()
    }
}

impl UserSource for MemoryUserSource {
    async fn fetch_user(&self, id: UserId) -> Result<UserRecord, FetchError> {
        self.fetches.lock().unwrap().push(id);
        if let Some(error) = self.failures.lock().unwrap().get(&id) {
            return Err(error.clone());
        }
        self.users
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(FetchError::NotFound(id))
    }
}
