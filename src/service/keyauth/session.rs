//! Session acquisition for the licensing API client.
//!
//! The session ID is requested with an `init` handshake on first use and cached for
//! the lifetime of the client. There is no expiry or refresh. If the handshake fails
//! for any reason a random ID is generated locally and cached the same way, so the
//! bot keeps working when `init` is unavailable.

use dioxus_logger::tracing;
use rand::Rng;

use crate::{error::api::ApiError, model::api::InitResponse};

use super::KeyAuthClient;

/// Length of a locally generated session ID.
const SESSION_ID_LENGTH: usize = 32;

impl KeyAuthClient {
    /// Returns the cached session ID, performing the handshake on first use.
    ///
    /// The session lock is held across the handshake, so concurrent first calls
    /// result in a single `init` request.
    ///
    /// # Returns
    /// - `String` - Session ID from the API, or a locally generated fallback
    pub async fn session_id(&self) -> String {
        let mut session = self.session.lock().await;

        if let Some(session_id) = session.as_ref() {
            return session_id.clone();
        }

        let session_id = match self.init().await {
            Ok(session_id) => {
                tracing::info!("Licensing API session initialized");
                session_id
            }
            Err(e) => {
                tracing::warn!(
                    "Licensing API session init failed, using locally generated session ID: {}",
                    e
                );
                Self::generate_session_id()
            }
        };

        *session = Some(session_id.clone());
        session_id
    }

    /// Performs the `init` handshake.
    ///
    /// # Returns
    /// - `Ok(String)` - Non-empty session ID returned by the API
    /// - `Err(ApiError)` - Network failure, non-2xx status, malformed body, `success: false`
    ///   or a missing session ID
    async fn init(&self) -> Result<String, ApiError> {
        const INIT: &str = "init";

        let form = [
            ("type", INIT),
            ("ver", self.config.version.as_str()),
            ("name", self.config.name.as_str()),
            ("ownerid", self.config.owner_id.as_str()),
        ];

        let body = self.post(INIT, &form).await?;
        let response =
            serde_json::from_str::<InitResponse>(&body).map_err(|source| ApiError::Decode {
                operation: INIT.to_string(),
                source,
            })?;

        if !response.success {
            return Err(ApiError::Rejected {
                operation: INIT.to_string(),
                message: response
                    .message
                    .unwrap_or_else(|| "no message provided".to_string()),
            });
        }

        match response.sessionid {
            Some(session_id) if !session_id.trim().is_empty() => Ok(session_id),
            _ => Err(ApiError::Rejected {
                operation: INIT.to_string(),
                message: "response did not contain a session ID".to_string(),
            }),
        }
    }

    /// Generates a random lowercase hexadecimal session ID.
    fn generate_session_id() -> String {
        const CHARSET: &[u8] = b"0123456789abcdef";

        let mut rng = rand::rng();

        (0..SESSION_ID_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }

    /// Returns the cached session ID without triggering a handshake.
    #[cfg(test)]
    pub async fn cached_session_id(&self) -> Option<String> {
        self.session.lock().await.clone()
    }
}
