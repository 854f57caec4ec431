//! # API crate: HTTP access to the user-data source
//!
//! [`HttpUserSource`] implements [`state::UserSource`] with `reqwest`, reading
//! records from the URL built by [`state::ClientConfig::user_url`]. The same code
//! runs natively and in the browser (reqwest uses `fetch` on WASM).
//!
//! Response handling:
//!
//! | Response | Result |
//! |----------|--------|
//! | connection / body read error | [`FetchError::Transport`] |
//! | `404` | [`FetchError::NotFound`] |
//! | other non-2xx | [`FetchError::Status`] |
//! | 2xx with a body that is not a user record | [`FetchError::Decode`] |

use reqwest::StatusCode;
use state::{ClientConfig, FetchError, UserId, UserRecord, UserSource};

/// Fetches user records over HTTP.
#[derive(Clone, Debug)]
pub struct HttpUserSource {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpUserSource {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl UserSource for HttpUserSource {
    async fn fetch_user(&self, id: UserId) -> Result<UserRecord, FetchError> {
        let url = self.config.user_url(id);
        tracing::debug!(%url, "requesting user record");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        check_status(id, response.status())?;

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        decode_user(&body)
    }
}

/// Map a response status to an error for anything but success.
pub fn check_status(id: UserId, status: StatusCode) -> Result<(), FetchError> {
    if status == StatusCode::NOT_FOUND {
        Err(FetchError::NotFound(id))
    } else if !status.is_success() {
        Err(FetchError::Status(status.as_u16()))
    } else {
        Ok(())
    }
}

/// Decode a response body into a complete user record.
pub fn decode_user(body: &str) -> Result<UserRecord, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}
