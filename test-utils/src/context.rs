use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use tokio::{net::TcpListener, task::JoinHandle};

use crate::{
    error::TestError,
    stub::{self, RecordedRequest, StubResponse, StubState},
};

/// Test context containing a running stub licensing API.
///
/// The stub server listens on an ephemeral port of `127.0.0.1` and runs on the test's
/// tokio runtime. It is shut down when the context is dropped.
pub struct TestContext {
    /// Address the stub server is listening on.
    pub addr: SocketAddr,

    /// Every request received so far, in arrival order.
    requests: Arc<Mutex<Vec<RecordedRequest>>>,

    /// Handle of the task serving requests.
    server: JoinHandle<()>,
}

impl TestContext {
    /// Binds a local listener and starts serving the scripted responses.
    ///
    /// Typically called internally by `TestBuilder::build()` rather than directly.
    ///
    /// # Arguments
    /// - `responses` - Scripted responses keyed by request type
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Stub server is accepting connections
    /// - `Err(TestError::Io)` - Failed to bind the listener
    pub async fn start(responses: HashMap<String, StubResponse>) -> Result<Self, TestError> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let requests = Arc::new(Mutex::new(Vec::new()));
        let app = stub::router(StubState {
            responses: Arc::new(responses),
            requests: requests.clone(),
        });

        let server = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            addr,
            requests,
            server,
        })
    }

    /// Endpoint URL to configure the client under test with.
    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    /// Returns a snapshot of every request received so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    /// Returns the requests received with the given `type` form field.
    pub fn requests_of_type(&self, request_type: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.request_type() == request_type)
            .collect()
    }

    /// Counts the requests received with the given `type` form field.
    pub fn request_count(&self, request_type: &str) -> usize {
        self.requests_of_type(request_type).len()
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        self.server.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use serde_json::json;

    /// Tests that the stub records form requests and answers with scripted bodies.
    ///
    /// Expected: scripted body for `stats`, default handshake for `init`
    #[tokio::test]
    async fn records_requests_and_replies_with_scripted_body() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_response("stats", json!({ "success": true, "info": { "users": 1 } }))
            .build()
            .await?;
        let http = reqwest::Client::new();

        let stats = http
            .post(test.url())
            .form(&[("type", "stats"), ("name", "app")])
            .send()
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        let init = http
            .post(test.url())
            .form(&[("type", "init")])
            .send()
            .await
            .unwrap()
            .text()
            .await
            .unwrap();

        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&stats).unwrap(),
            json!({ "success": true, "info": { "users": 1 } })
        );
        assert!(init.contains(crate::stub::STUB_SESSION_ID));
        assert_eq!(test.requests().len(), 2);
        assert_eq!(test.request_count("stats"), 1);
        assert_eq!(test.requests_of_type("stats")[0].field("name"), Some("app"));

        Ok(())
    }

    #[tokio::test]
    async fn scripted_status_is_returned() -> Result<(), TestError> {
        let test = TestBuilder::new().with_status("init", 503).build().await?;

        let response = reqwest::Client::new()
            .post(test.url())
            .form(&[("type", "init")])
            .send()
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 503);

        Ok(())
    }
}
