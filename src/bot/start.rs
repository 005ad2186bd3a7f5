use std::sync::Arc;

use dioxus_logger::tracing;
use serenity::all::{ApplicationId, Client, GatewayIntents, GuildId};

use crate::{
    bot::handler::Handler, command::dispatch::CommandDispatcher, config::Config, error::AppError,
};

/// Initializes the Discord bot client
///
/// Builds the Serenity client with the event handler but does not connect to the
/// gateway yet.
///
/// # Arguments
/// - `config` - Application configuration
/// - `dispatcher` - Command dispatcher shared by all interaction handlers
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(
    config: &Config,
    dispatcher: Arc<CommandDispatcher>,
) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS;

    let handler = Handler::new(dispatcher, config.discord_guild_id.map(GuildId::new));

    let client = Client::builder(&config.discord_token, intents)
        .application_id(ApplicationId::new(config.discord_application_id))
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Starts the Discord bot in a blocking manner
///
/// Connects to the gateway and processes events until the connection is closed.
///
/// # Arguments
/// - `client` - Client created by `init_bot`
///
/// # Returns
/// - `Ok(())` if the bot shut down cleanly
/// - `Err(AppError)` if the gateway connection fails
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
