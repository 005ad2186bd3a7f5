use std::collections::HashMap;

use serde_json::Value;

use crate::{context::TestContext, error::TestError, stub::StubResponse};

/// Builder for creating test contexts with a scripted stub licensing API.
///
/// Responses are scripted per request `type`. Request types without a scripted
/// response get a default: `init` answers with a successful handshake carrying the
/// session ID `stub-session`, every other type answers `{"success": true}`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::{builder::TestBuilder, factory};
///
/// let test = TestBuilder::new()
///     .with_status("init", 503)
///     .with_response("userdata", factory::response::user_info("alice", "1.2.3.4"))
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Scripted responses keyed by request type.
    responses: HashMap<String, StubResponse>,
}

impl TestBuilder {
    /// Creates a new test builder with no scripted responses.
    ///
    /// # Returns
    /// - New `TestBuilder` instance relying on default responses
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
        }
    }

    /// Scripts a `200 OK` JSON response for a request type.
    ///
    /// # Arguments
    /// - `request_type` - Value of the `type` form field to match
    /// - `body` - JSON body to return
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_response(mut self, request_type: &str, body: Value) -> Self {
        self.responses
            .insert(request_type.to_string(), StubResponse::json(200, body));
        self
    }

    /// Scripts a bare HTTP status for a request type.
    ///
    /// The response body is a short plain-text error, so clients that ignore the status
    /// and try to decode the body fail as well.
    ///
    /// # Arguments
    /// - `request_type` - Value of the `type` form field to match
    /// - `status` - HTTP status code to return
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_status(mut self, request_type: &str, status: u16) -> Self {
        self.responses
            .insert(request_type.to_string(), StubResponse::text(status, "stub error"));
        self
    }

    /// Scripts a raw, possibly malformed, `200 OK` body for a request type.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_raw_body(mut self, request_type: &str, body: &str) -> Self {
        self.responses
            .insert(request_type.to_string(), StubResponse::text(200, body));
        self
    }

    /// Starts the stub server with the configured responses.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Running stub server ready to receive requests
    /// - `Err(TestError::Io)` - Failed to bind the local listener
    pub async fn build(self) -> Result<TestContext, TestError> {
        TestContext::start(self.responses).await
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
