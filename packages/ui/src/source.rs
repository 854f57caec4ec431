//! Shared user-source wiring for all platforms.
//!
//! Components fetch through a [`SourceHandle`] found in context. The app shell
//! provides one built from its [`state::ClientConfig`] with [`make_source`];
//! tests provide a [`state::MemoryUserSource`] instead.

use api::HttpUserSource;
use dioxus::prelude::*;
use state::{ClientConfig, FetchError, MemoryUserSource, UserId, UserRecord, UserSource};

/// Any of the user sources a component can be pointed at.
#[derive(Clone, Debug)]
pub enum SourceHandle {
    Http(HttpUserSource),
    Memory(MemoryUserSource),
}

impl UserSource for SourceHandle {
    async fn fetch_user(&self, id: UserId) -> Result<UserRecord, FetchError> {
        match self {
            SourceHandle::Http(source) => source.fetch_user(id).await,
            SourceHandle::Memory(source) => source.fetch_user(id).await,
        }
    }
}

/// Create the HTTP source described by `config`.
pub fn make_source(config: &ClientConfig) -> SourceHandle {
    SourceHandle::Http(HttpUserSource::new(config.clone()))
}

/// The user source provided in context, or the default HTTP source when no
/// ancestor provides one.
pub fn use_user_source() -> SourceHandle {
    use_hook(|| {
        try_consume_context::<SourceHandle>().unwrap_or_else(|| {
            tracing::debug!("no user source in context, using default config");
            make_source(&ClientConfig::default())
        })
    })
}
