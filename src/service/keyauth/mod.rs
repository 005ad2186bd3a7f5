//! Client for the upstream licensing API.
//!
//! Every call is a form-encoded `POST` to a single configured endpoint. Requests are
//! authenticated with a session ID obtained from an `init` handshake on first use and
//! cached for the lifetime of the client.

pub mod operation;
pub mod session;

#[cfg(test)]
mod test;

use dioxus_logger::tracing;
use reqwest::header;
use serenity::async_trait;
use tokio::sync::Mutex;

use crate::{
    config::KeyAuthConfig,
    error::{api::ApiError, config::ConfigError},
    model::api::{ApiResponse, ApiResult},
};

use self::operation::Operation;

/// User agent sent with every licensing API request.
pub const USER_AGENT: &str = concat!("licensebot/", env!("CARGO_PKG_VERSION"));

/// Remote operations the command dispatcher can execute.
///
/// Implemented by `KeyAuthClient`; tests substitute their own implementation.
#[async_trait]
pub trait LicenseApi: Send + Sync {
    /// Executes a single remote operation.
    ///
    /// # Returns
    /// - `Ok(ApiResult)` - The API answered; `success` may still be `false`
    /// - `Err(ApiError)` - Network failure, non-2xx status or malformed body
    async fn execute(&self, operation: &Operation) -> Result<ApiResult, ApiError>;
}

/// Licensing API client holding the static configuration and the cached session.
pub struct KeyAuthClient {
    http: reqwest::Client,
    config: KeyAuthConfig,
    /// Session ID, `None` until the first request
    session: Mutex<Option<String>>,
}

impl KeyAuthClient {
    /// Creates a new client without contacting the API.
    ///
    /// # Arguments
    /// - `http` - Shared HTTP client
    /// - `config` - Application name, owner ID, version and endpoint URL
    ///
    /// # Returns
    /// - `Ok(KeyAuthClient)` - Client ready for use
    /// - `Err(ConfigError::MissingValue)` - Application name or owner ID is empty
    pub fn new(http: reqwest::Client, config: KeyAuthConfig) -> Result<Self, ConfigError> {
        if config.name.trim().is_empty() {
            return Err(ConfigError::MissingValue("name"));
        }
        if config.owner_id.trim().is_empty() {
            return Err(ConfigError::MissingValue("ownerid"));
        }

        Ok(Self {
            http,
            config,
            session: Mutex::new(None),
        })
    }

    /// Sends an authenticated request of the given type.
    ///
    /// Resolves the session ID first (performing the handshake if needed), then posts
    /// `type`, `sessionid`, `name` and `ownerid` together with `params`.
    ///
    /// # Arguments
    /// - `request_type` - Value of the `type` form field
    /// - `params` - Operation-specific form fields
    ///
    /// # Returns
    /// - `Ok(ApiResponse)` - Parsed response body, `info` left undecoded
    /// - `Err(ApiError::Transport)` - Request could not be sent or read
    /// - `Err(ApiError::Status)` - Non-2xx HTTP status
    /// - `Err(ApiError::Decode)` - Body is not a valid response object
    pub async fn request(
        &self,
        request_type: &str,
        params: &[(&str, String)],
    ) -> Result<ApiResponse, ApiError> {
        let session_id = self.session_id().await;

        let mut form: Vec<(&str, &str)> = vec![
            ("type", request_type),
            ("sessionid", session_id.as_str()),
            ("name", self.config.name.as_str()),
            ("ownerid", self.config.owner_id.as_str()),
        ];
        form.extend(params.iter().map(|(key, value)| (*key, value.as_str())));

        let body = self.post(request_type, &form).await?;

        serde_json::from_str::<ApiResponse>(&body).map_err(|source| ApiError::Decode {
            operation: request_type.to_string(),
            source,
        })
    }

    /// Posts a form to the configured endpoint and returns the raw body.
    async fn post(&self, request_type: &str, form: &[(&str, &str)]) -> Result<String, ApiError> {
        let transport = |source| ApiError::Transport {
            operation: request_type.to_string(),
            source,
        };

        let response = self
            .http
            .post(&self.config.url)
            .header(header::USER_AGENT, USER_AGENT)
            .form(form)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                operation: request_type.to_string(),
                status: status.as_u16(),
                text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        response.text().await.map_err(transport)
    }
}

#[async_trait]
impl LicenseApi for KeyAuthClient {
    async fn execute(&self, operation: &Operation) -> Result<ApiResult, ApiError> {
        let request_type = operation.request_type();
        let response = self.request(request_type, &operation.params()).await?;

        tracing::debug!(
            "Licensing API '{}' responded with success={}",
            request_type,
            response.success
        );

        Ok(ApiResult::decode(operation.info_kind(), response))
    }
}
