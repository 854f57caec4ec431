//! # Client configuration: `profile.toml`
//!
//! Tells the front-end where user records are fetched from.
//!
//! ```toml
//! [api]
//! base_url = "https://jsonplaceholder.typicode.com"
//! ```
//!
//! Every section falls back to its default, so an empty file is equivalent to
//! [`ClientConfig::default`].

use serde::{Deserialize, Serialize};

use crate::models::UserId;

/// Top-level configuration stored in `profile.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Remote user-data source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL; records are read from `{base_url}/users/{id}`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "https://jsonplaceholder.typicode.com".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "profile.toml"
    }

    /// URL of the record for `id`.
    pub fn user_url(&self, id: UserId) -> String {
        format!("{}/users/{id}", self.api.base_url.trim_end_matches('/'))
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
