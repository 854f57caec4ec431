use thiserror::Error;

use crate::models::UserId;

/// Why a user record could not be obtained.
///
/// Holds only owned strings so it can be cloned into UI state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("invalid user record: {0}")]
    Decode(String),
    #[error("user {0} not found")]
    NotFound(UserId),
}
