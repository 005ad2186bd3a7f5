//! Discord bot integration for the licensing admin commands.
//!
//! This module provides the Discord side of the application: it registers the slash
//! command schema when the bot connects and turns every command interaction into a
//! `CommandInvocation` for the dispatcher. The resulting notification is sent back as
//! an ephemeral embed.
//!
//! # Gateway Intents
//!
//! Application command interactions are delivered regardless of intents. The bot only
//! requests `GUILDS` so that guild availability is tracked.
//!
//! # Command Registration
//!
//! Commands are registered on `ready`. When a guild ID is configured they are registered
//! to that guild only, which takes effect immediately; otherwise they are registered
//! globally, which can take a while to propagate.

pub mod embed;
pub mod handler;
pub mod start;
