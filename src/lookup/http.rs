//! Shared GET-and-decode helper for the service clients.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::domain::LookupError;

/// Error body both services send with 4xx/5xx statuses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Send a prepared GET request and decode the JSON body.
///
/// Connection failures and non-2xx statuses become [`LookupError::Transport`];
/// a body that isn't the expected JSON becomes [`LookupError::Decode`].
pub(crate) async fn get_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, LookupError> {
    let response = request
        .send()
        .await
        .map_err(|e| LookupError::Transport(e.to_string()))?;

    let status = response.status();
    let url = response.url().to_string();

    if !status.is_success() {
        tracing::debug!("GET {} returned {}", url, status);
        let body = response.text().await.unwrap_or_default();
        return Err(LookupError::Transport(status_message(status, &body)));
    }

    let body = response
        .text()
        .await
        .map_err(|e| LookupError::Transport(e.to_string()))?;

    decode(&body)
}

/// Describe a failed status, including the service's error text when present
fn status_message(status: reqwest::StatusCode, body: &str) -> String {
    let reason = status.canonical_reason().unwrap_or("Unknown");
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(error) => format!("HTTP {}: {} - {}", status.as_u16(), reason, error.error),
        Err(_) => format!("HTTP {}: {}", status.as_u16(), reason),
    }
}

/// Decode a response body.
pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> Result<T, LookupError> {
    serde_json::from_str(body).map_err(|e| LookupError::Decode(e.to_string()))
}
