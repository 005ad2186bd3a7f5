//! Slash command catalog and dispatching.
//!
//! - `spec` - Static command schema registered with Discord
//! - `dispatch` - Admin check, argument validation and routing to the licensing API
//! - `render` - Conversion of results and errors into notifications

pub mod dispatch;
pub mod render;
pub mod spec;

#[cfg(test)]
mod test;
