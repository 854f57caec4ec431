//! # User profile loading
//!
//! [`ProfileState`] is the display state of a user profile:
//!
//! | State | Entered when |
//! |-------|--------------|
//! | `Loading` | on mount, and whenever a different user id is requested |
//! | `Loaded(record)` | the fetch for the current id resolved with a record |
//! | `Failed(error)` | the fetch for the current id failed |
//!
//! A record is only ever stored whole, so a consumer sees either the loading
//! state or every field of the record at once.
//!
//! [`ProfileLoader`] drives those transitions against a [`UserSource`]. It keeps
//! the state in an [`Observable`] so a UI can subscribe to it, issues at most one
//! fetch per requested id, and drops responses for ids that are no longer
//! current.

use std::cell::{Cell, RefCell};

use scopeguard::ScopeGuard;

use crate::error::FetchError;
use crate::models::{UserId, UserRecord};
use crate::observable::{Observable, SubscriptionId};
use crate::source::UserSource;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ProfileState {
    #[default]
    Loading,
    Loaded(UserRecord),
    Failed(FetchError),
}

impl ProfileState {
    pub fn from_result(result: Result<UserRecord, FetchError>) -> Self {
        match result {
            Ok(record) => ProfileState::Loaded(record),
            Err(error) => ProfileState::Failed(error),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ProfileState::Loading)
    }

    pub fn record(&self) -> Option<&UserRecord> {
        match self {
            ProfileState::Loaded(record) => Some(record),
            _ => None,
        }
    }
}

/// State machine fetching one user record per requested id.
///
/// Subscribers run while the state is borrowed and must not call back into the
/// loader.
pub struct ProfileLoader<S: UserSource> {
    source: S,
    state: RefCell<Observable<ProfileState>>,
    current: Cell<Option<UserId>>,
}

impl<S: UserSource> ProfileLoader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: RefCell::new(Observable::default()),
            current: Cell::new(None),
        }
    }

    pub fn state(&self) -> ProfileState {
        self.state.borrow().get().clone()
    }

    /// The id of the most recent [`load`](Self::load) call.
    pub fn current_id(&self) -> Option<UserId> {
        self.current.get()
    }

    pub fn subscribe(&self, callback: impl FnMut(&ProfileState) + 'static) -> SubscriptionId {
        self.state.borrow_mut().subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.state.borrow_mut().unsubscribe(id)
    }

    /// Fetch the record for `id` and move to `Loaded` or `Failed`.
    ///
    /// Does nothing if `id` is already the current id, whether its fetch is
    /// still pending or has finished. Dropping the returned future before the
    /// fetch completes forgets the request, so the next `load(id)` fetches again.
    pub async fn load(&self, id: UserId) {
        if self.current.get() == Some(id) {
            tracing::trace!(user_id = id, "profile already requested");
            return;
        }
        self.current.set(Some(id));
        if !self.state.borrow().get().is_loading() {
            self.transition(ProfileState::Loading);
        }

        tracing::debug!(user_id = id, "fetching user profile");
        let pending = scopeguard::guard(&self.current, move |current| {
            if current.get() == Some(id) {
                tracing::debug!(user_id = id, "profile fetch cancelled");
                current.set(None);
            }
        });
        let result = self.source.fetch_user(id).await;
        ScopeGuard::into_inner(pending);

        if self.current.get() != Some(id) {
            tracing::warn!(user_id = id, "discarding stale profile response");
            return;
        }
        if let Err(e) = &result {
            tracing::error!(user_id = id, "failed to load user profile: {}", e);
        }
        self.transition(ProfileState::from_result(result));
    }

    fn transition(&self, next: ProfileState) {
        tracing::debug!(?next, "profile state transition");
        self.state.borrow_mut().set(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryUserSource;
    use std::rc::Rc;
    use std::time::Duration;

    fn john() -> UserRecord {
        UserRecord::new(4, "John", "john@gmail.com")
    }

    fn record_states<S: UserSource>(loader: &ProfileLoader<S>) -> Rc<RefCell<Vec<ProfileState>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        loader.subscribe(move |state| sink.borrow_mut().push(state.clone()));
        seen
    }

    /// Source whose responses take `id` milliseconds to arrive.
    struct SlowSource;

    impl UserSource for SlowSource {
        async fn fetch_user(&self, id: UserId) -> Result<UserRecord, FetchError> {
            tokio::time::sleep(Duration::from_millis(id)).await;
            Ok(UserRecord::new(id, format!("user{id}"), format!("user{id}@example.com")))
        }
    }

    #[tokio::test]
    async fn test_starts_loading() {
        let loader = ProfileLoader::new(MemoryUserSource::new());
        assert!(loader.state().is_loading());
        assert!(loader.state().record().is_none());
        assert_eq!(loader.current_id(), None);
    }

    #[tokio::test]
    async fn test_load_resolves_to_record() {
        let source = MemoryUserSource::new().with_user(john());
        let loader = ProfileLoader::new(source.clone());
        let seen = record_states(&loader);

        loader.load(4).await;

        assert_eq!(loader.state(), ProfileState::Loaded(john()));
        assert_eq!(loader.state().record(), Some(&john()));
        // Already loading on mount, so the only transition is to Loaded
        assert_eq!(*seen.borrow(), vec![ProfileState::Loaded(john())]);
        assert_eq!(source.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_same_id_fetches_once() {
        let source = MemoryUserSource::new().with_user(john());
        let loader = ProfileLoader::new(source.clone());

        loader.load(4).await;
        loader.load(4).await;
        loader.load(4).await;

        assert_eq!(source.fetched(), vec![4]);
        assert_eq!(loader.state().record().map(|u| u.name.as_str()), Some("John"));
    }

    #[tokio::test]
    async fn test_concurrent_same_id_fetches_once() {
        let loader = ProfileLoader::new(SlowSource);
        let seen = record_states(&loader);

        tokio::join!(loader.load(20), loader.load(20));

        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(loader.state().record().map(|u| u.id), Some(20));
    }

    #[tokio::test]
    async fn test_failure_moves_to_failed() {
        let source = MemoryUserSource::new();
        let loader = ProfileLoader::new(source.clone());

        loader.load(7).await;
        assert_eq!(loader.state(), ProfileState::Failed(FetchError::NotFound(7)));

        source.fail_with(8, FetchError::Decode("missing field `email`".into()));
        loader.load(8).await;
        assert_eq!(
            loader.state(),
            ProfileState::Failed(FetchError::Decode("missing field `email`".into()))
        );
    }

    #[tokio::test]
    async fn test_new_id_reloads() {
        let other = UserRecord::new(5, "Jane", "jane@example.com");
        let source = MemoryUserSource::new().with_user(john()).with_user(other.clone());
        let loader = ProfileLoader::new(source.clone());
        let seen = record_states(&loader);

        loader.load(4).await;
        loader.load(5).await;

        assert_eq!(source.fetched(), vec![4, 5]);
        assert_eq!(
            *seen.borrow(),
            vec![
                ProfileState::Loaded(john()),
                ProfileState::Loading,
                ProfileState::Loaded(other),
            ]
        );
    }

    #[tokio::test]
    async fn test_stale_response_is_discarded() {
        let loader = ProfileLoader::new(SlowSource);

        // The fetch for 60 resolves after the fetch for 5 and must not win
        tokio::join!(loader.load(60), async {
            tokio::time::sleep(Duration::from_millis(1)).await;
            loader.load(5).await;
        });

        assert_eq!(loader.current_id(), Some(5));
        assert_eq!(loader.state().record().map(|u| u.id), Some(5));
    }

    #[tokio::test]
    async fn test_cancelled_load_can_be_retried() {
        let loader = ProfileLoader::new(SlowSource);

        // Drop the fetch for 20 before its response arrives
        let cancelled = tokio::time::timeout(Duration::from_millis(1), loader.load(20)).await;
        assert!(cancelled.is_err());
        assert_eq!(loader.current_id(), None);
        assert!(loader.state().is_loading());

        loader.load(20).await;
        assert_eq!(loader.current_id(), Some(20));
        assert_eq!(loader.state().record().map(|u| u.id), Some(20));
    }

    #[tokio::test]
    async fn test_cancelled_reload_after_switch() {
        let loader = ProfileLoader::new(SlowSource);

        // 20 -> 30 -> 20 with every earlier fetch dropped mid-flight
        let _ = tokio::time::timeout(Duration::from_millis(1), loader.load(20)).await;
        let _ = tokio::time::timeout(Duration::from_millis(1), loader.load(30)).await;
        loader.load(20).await;

        assert_eq!(loader.state().record().map(|u| u.id), Some(20));
    }

    #[tokio::test]
    async fn test_unsubscribe_stops_updates() {
        let source = MemoryUserSource::new().with_user(john());
        let loader = ProfileLoader::new(source);
        let seen = Rc::new(RefCell::new(0));
        let sink = seen.clone();
        let id = loader.subscribe(move |_| *sink.borrow_mut() += 1);

        assert!(loader.unsubscribe(id));
        loader.load(4).await;
        assert_eq!(*seen.borrow(), 0);
    }
}
