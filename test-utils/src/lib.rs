//! Licensebot Test Utils
//!
//! Provides shared testing utilities for the licensebot crate. The centrepiece is a stub
//! licensing API: a small HTTP server bound to an ephemeral local port that records every
//! form request it receives and answers with scripted JSON bodies.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for scripting stub responses per request type
//! - **TestContext**: Running stub server plus access to the recorded requests
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders for common licensing API response bodies
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_stats() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_response("stats", factory::response::stats(42, 10, 3))
//!         .build()
//!         .await?;
//!
//!     // Point the client at `test.url()` and perform requests...
//!
//!     assert_eq!(test.request_count("init"), 1);
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod stub;
