use thiserror::Error;

/// Failures talking to the upstream licensing API.
///
/// An upstream response with `success: false` is not an error; it is returned as a
/// regular `ApiResult` and rendered as a failure notification by the dispatcher.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request could not be sent or its body could not be read.
    #[error("Request '{operation}' to the licensing API failed: {source}")]
    Transport {
        /// Request type that was being sent
        operation: String,
        /// The underlying network error
        #[source]
        source: reqwest::Error,
    },

    /// The licensing API answered with a non-2xx HTTP status.
    #[error("Licensing API returned HTTP {status} {text} for '{operation}'")]
    Status {
        /// Request type that was being sent
        operation: String,
        /// Numeric HTTP status code
        status: u16,
        /// Canonical reason phrase for the status
        text: String,
    },

    /// The response body was not a `{success, message?, info?}` JSON object.
    #[error("Failed to decode licensing API response for '{operation}': {source}")]
    Decode {
        /// Request type that was being sent
        operation: String,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The session handshake completed but the API refused it.
    #[error("Licensing API rejected '{operation}': {message}")]
    Rejected {
        /// Request type that was being sent
        operation: String,
        /// Message returned by the API, or a description of what was missing
        message: String,
    },
}
