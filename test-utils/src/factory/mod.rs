//! Factory methods for creating licensing API response bodies.
//!
//! Each function returns a `serde_json::Value` in the shape the licensing API answers
//! with, ready to be scripted on a `TestBuilder`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! let test = TestBuilder::new()
//!     .with_response("init", factory::response::init_failure("invalid application"))
//!     .with_response("add", factory::response::success())
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `response` - Handshake, plain success/failure, user record and statistics bodies

pub mod response;
