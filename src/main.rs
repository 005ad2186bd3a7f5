mod bot;
mod command;
mod config;
mod error;
mod model;
mod service;
mod startup;
mod util;

use dioxus_logger::tracing;

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    if let Err(e) = dioxus_logger::init(config.log_level) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let http_client = startup::setup_reqwest_client()?;
    let dispatcher = startup::setup_dispatcher(&config, http_client)?;

    tracing::info!("Starting licensebot");

    let client = bot::start::init_bot(&config, dispatcher).await?;
    bot::start::start_bot(client).await?;

    Ok(())
}
