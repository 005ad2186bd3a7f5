//! Slash command interaction handler.
//!
//! Converts a Serenity command interaction into a `CommandInvocation`, runs it through
//! the dispatcher and edits the deferred response with the resulting embed.

use dioxus_logger::tracing;
use serenity::all::{
    CommandInteraction, Context, EditInteractionResponse, Interaction, ResolvedValue,
};

use crate::{
    bot::embed::build_embed,
    command::dispatch::CommandDispatcher,
    model::command::{ArgValue, CommandArgs, CommandInvocation},
};

/// Handles an interaction event.
///
/// Only application command interactions are processed. The response is deferred as
/// ephemeral before the licensing API is called, since upstream calls have no timeout
/// and Discord requires an acknowledgement within three seconds.
///
/// # Arguments
/// - `dispatcher` - Command dispatcher
/// - `ctx` - Discord context for responding to the interaction
/// - `interaction` - The received interaction
pub async fn handle_interaction(
    dispatcher: &CommandDispatcher,
    ctx: Context,
    interaction: Interaction,
) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    let invocation = invocation_from(&command);

    tracing::info!(
        "/{} invoked by {} ({})",
        invocation.name,
        command.user.name,
        invocation.caller_id
    );

    if let Err(e) = command.defer_ephemeral(&ctx.http).await {
        tracing::error!("Failed to defer /{} response: {:?}", invocation.name, e);
        return;
    }

    let notification = dispatcher.dispatch(&invocation).await;

    let response = EditInteractionResponse::new().embed(build_embed(&notification));
    if let Err(e) = command.edit_response(&ctx.http, response).await {
        tracing::error!("Failed to send /{} response: {:?}", invocation.name, e);
    }
}

/// Collects the command name, caller and string/integer options of an interaction.
fn invocation_from(command: &CommandInteraction) -> CommandInvocation {
    let mut args = CommandArgs::new();

    for option in command.data.options() {
        match option.value {
            ResolvedValue::String(value) => {
                args.insert(option.name, ArgValue::String(value.to_string()))
            }
            ResolvedValue::Integer(value) => args.insert(option.name, ArgValue::Integer(value)),
            _ => {}
        }
    }

    CommandInvocation::new(command.data.name.clone(), command.user.id.get(), args)
}
