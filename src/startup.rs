use std::sync::Arc;

use dioxus_logger::tracing;

use crate::{
    command::dispatch::CommandDispatcher, config::Config, error::AppError,
    service::keyauth::KeyAuthClient,
};

/// Builds the HTTP client used for licensing API requests.
///
/// Redirects are not followed: the licensing API answers every request directly, and a
/// redirect would turn the form `POST` into a `GET`.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - TLS backend could not be initialized
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Creates the command dispatcher backed by the licensing API client.
///
/// Does not contact the licensing API; the session is acquired on the first command.
///
/// # Arguments
/// - `config` - Application configuration
/// - `http` - HTTP client for licensing API requests
///
/// # Returns
/// - `Ok(Arc<CommandDispatcher>)` - Dispatcher shared by all interaction handlers
/// - `Err(AppError::ConfigErr)` - Licensing API name or owner ID is empty
pub fn setup_dispatcher(
    config: &Config,
    http: reqwest::Client,
) -> Result<Arc<CommandDispatcher>, AppError> {
    let api = KeyAuthClient::new(http, config.keyauth.clone())?;

    if config.admins.is_empty() {
        tracing::warn!("No admins configured, every command will be denied");
    } else {
        tracing::info!("{} admin(s) configured", config.admins.len());
    }

    Ok(Arc::new(CommandDispatcher::new(
        config.admins.clone(),
        Arc::new(api),
    )))
}
