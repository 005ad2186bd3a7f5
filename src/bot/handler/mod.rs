use std::sync::Arc;

use serenity::all::{Context, EventHandler, GuildId, Interaction, Ready};
use serenity::async_trait;

use crate::command::dispatch::CommandDispatcher;

pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub dispatcher: Arc<CommandDispatcher>,
    /// Guild to register commands in; `None` registers them globally
    pub guild_id: Option<GuildId>,
}

impl Handler {
    pub fn new(dispatcher: Arc<CommandDispatcher>, guild_id: Option<GuildId>) -> Self {
        Self {
            dispatcher,
            guild_id,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready, self.guild_id).await;
    }

    /// Called when a user invokes a slash command
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(&self.dispatcher, ctx, interaction).await;
    }
}
