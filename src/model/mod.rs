//! Domain models shared by the dispatcher, the licensing API client and the bot.
//!
//! These types form the boundary between layers: the bot converts Discord interactions
//! into `CommandInvocation`s, the dispatcher talks to the API client in terms of
//! `ApiResult`s, and hands a `Notification` back to the bot for rendering.

pub mod admin;
pub mod api;
pub mod command;
pub mod notification;
