//! Stub licensing API server.
//!
//! An axum router with a single `POST /` route that accepts form-encoded requests,
//! records them and replies with the response scripted for the request's `type`.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Form, Router,
};
use serde_json::{json, Value};

/// Session ID returned by the default `init` response.
pub const STUB_SESSION_ID: &str = "stub-session";

/// A form request received by the stub server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Decoded form fields
    pub form: HashMap<String, String>,
    /// Value of the `User-Agent` header, if sent
    pub user_agent: Option<String>,
    /// Value of the `Content-Type` header, if sent
    pub content_type: Option<String>,
}

impl RecordedRequest {
    /// Returns the value of a form field.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.form.get(name).map(String::as_str)
    }

    /// Returns the `type` form field, or an empty string if absent.
    pub fn request_type(&self) -> &str {
        self.field("type").unwrap_or_default()
    }
}

/// Scripted response for one request type.
#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl StubResponse {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.to_string(),
        }
    }

    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "text/plain",
            body: body.to_string(),
        }
    }

    fn default_for(request_type: &str) -> Self {
        match request_type {
            "init" => Self::json(200, json!({ "success": true, "sessionid": STUB_SESSION_ID })),
            _ => Self::json(200, json!({ "success": true })),
        }
    }
}

/// Shared state of the stub server.
#[derive(Clone)]
pub struct StubState {
    pub responses: Arc<HashMap<String, StubResponse>>,
    pub requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Builds the stub router.
pub fn router(state: StubState) -> Router {
    Router::new().route("/", post(handle)).with_state(state)
}

async fn handle(
    State(state): State<StubState>,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };

    let request = RecordedRequest {
        user_agent: header_value(header::USER_AGENT),
        content_type: header_value(header::CONTENT_TYPE),
        form,
    };

    let response = state
        .responses
        .get(request.request_type())
        .cloned()
        .unwrap_or_else(|| StubResponse::default_for(request.request_type()));

    if let Ok(mut requests) = state.requests.lock() {
        requests.push(request);
    }

    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (
        status,
        [(header::CONTENT_TYPE, response.content_type)],
        response.body,
    )
        .into_response()
}
