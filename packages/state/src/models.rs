//! Data received from the user source.

use serde::{Deserialize, Serialize};

/// Identifier of a user record.
pub type UserId = u64;

/// A user as returned by the external data source.
///
/// Only the three fields the profile displays are kept; any other fields in the
/// response body are ignored during decoding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl UserRecord {
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}
