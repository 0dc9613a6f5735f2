//! Shared reqwest plumbing for the service clients.

use phenoselect_core::ServiceError;
use reqwest::Response;
use serde::de::DeserializeOwned;
use std::error::Error;
use std::time::Duration;

/// Renders an error with every `source()` below it, joined by ": ".
pub(crate) fn error_chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        // Some wrappers already embed their cause in their own message
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// Maps a reqwest failure onto the service error taxonomy.
pub(crate) fn map_request_error(err: reqwest::Error, timeout: Duration) -> ServiceError {
    if err.is_timeout() {
        ServiceError::Timeout {
            timeout_ms: timeout.as_millis() as u64,
        }
    } else {
        ServiceError::transport(error_chain(&err))
    }
}

/// Passes 2xx responses through and turns anything else into `ServiceError::Status`.
pub(crate) async fn ensure_success(response: Response) -> Result<Response, ServiceError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = body_text(response.text().await);
    Err(ServiceError::Status {
        status: status.as_u16(),
        body,
    })
}

/// Body text for an error status; a failed read keeps its own cause.
fn body_text<E: Error>(read: Result<String, E>) -> String {
    read.unwrap_or_else(|e| format!("<failed to read body: {}>", error_chain(&e)))
}

/// Reads the body and decodes it as JSON.
pub(crate) async fn decode_json<T: DeserializeOwned>(
    response: Response,
    timeout: Duration,
) -> Result<T, ServiceError> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| map_request_error(e, timeout))?;

    serde_json::from_slice(&bytes).map_err(|e| ServiceError::decode(error_chain(&e)))
}
