//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake.
//!
//! The ready handler is used to:
//! - Log connection information
//! - Set the bot's activity
//! - Register the slash command schema

use dioxus_logger::tracing;
use serenity::all::{ActivityData, Command, Context, GuildId, Ready};

use crate::command::spec;

/// Handles the ready event when the bot connects to Discord.
///
/// Registers every command of the catalog, either to the configured guild or globally.
/// Registration overwrites the previously registered set, so renamed or removed
/// commands disappear. Failures are logged; the bot keeps running.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity and registering commands
/// - `ready` - Ready event data containing bot user information
/// - `guild_id` - Guild to register commands in, `None` for global registration
pub async fn handle_ready(ctx: Context, ready: Ready, guild_id: Option<GuildId>) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::custom("Managing licenses")));

    let commands = spec::create_commands();

    let registered = match guild_id {
        Some(guild_id) => guild_id.set_commands(&ctx.http, commands).await,
        None => Command::set_global_commands(&ctx.http, commands).await,
    };

    match (registered, guild_id) {
        (Ok(commands), Some(guild_id)) => tracing::info!(
            "Registered {} commands in guild {}",
            commands.len(),
            guild_id
        ),
        (Ok(commands), None) => tracing::info!("Registered {} global commands", commands.len()),
        (Err(e), _) => tracing::error!("Failed to register commands: {:?}", e),
    }
}
