//! Error types for the bot.
//!
//! `AppError` is the top-level error type that wraps the domain-specific errors. Only
//! `ConfigError` is fatal: it is returned from `main` before the Discord client starts.
//! Every other error is caught per interaction by the command dispatcher and turned
//! into a notification for the invoking user.

pub mod api;
pub mod command;
pub mod config;

use thiserror::Error;

use crate::error::{api::ApiError, command::CommandError, config::ConfigError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the bot. Most variants use
/// `#[from]` for automatic error conversion with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Prevents the bot from starting.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Error calling the upstream licensing API.
    #[error(transparent)]
    ApiErr(#[from] ApiError),

    /// Slash command rejected before reaching the licensing API.
    #[error(transparent)]
    CommandErr(#[from] CommandError),

    /// HTTP client construction error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
