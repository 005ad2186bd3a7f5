//! Service layer for external integrations.
//!
//! - `keyauth` - Client for the upstream licensing API

pub mod keyauth;
