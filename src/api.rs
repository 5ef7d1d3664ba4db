//! Request dispatcher for the Submagic API. One generic entry point issues
//! the HTTP call, attaches the credential and normalizes every failure mode
//! into an [`ApiFailure`] record. No retries happen here; backoff is the
//! calling host's responsibility since it sees attempts across tools.

use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use tracing::debug;

use crate::config::{self, ServerContext};
use crate::error::ApiFailure;

pub type ApiResult = Result<Value, ApiFailure>;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(ctx: &ServerContext) -> Self {
        Self {
            http: Client::builder()
                .timeout(ctx.timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: ctx.base_url.clone(),
        }
    }

    /// Issue one call against the fixed base URL. The credential is read
    /// from the environment on every call.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        query: Option<&[(&str, String)]>,
    ) -> ApiResult {
        let api_key =
            config::api_key().map_err(|e| ApiFailure::missing_credential(e.to_string()))?;

        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        debug!(%method, %url, "dispatching Submagic API request");

        let mut request = self
            .http
            .request(method, &url)
            .header("x-api-key", api_key)
            .header("Content-Type", "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }
        if let Some(query) = query {
            request = request.query(query);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => return Err(ApiFailure::timeout()),
            Err(e) => return Err(ApiFailure::transport(e.to_string())),
        };

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ApiFailure::rate_limited());
        }
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiFailure::authentication_failed());
        }

        let body_text = match response.text().await {
            Ok(text) => text,
            Err(e) if e.is_timeout() => return Err(ApiFailure::timeout()),
            Err(e) => return Err(ApiFailure::transport(e.to_string())),
        };

        if !status.is_success() {
            return Err(ApiFailure::api(
                status.as_u16(),
                extract_error_message(&body_text),
            ));
        }

        serde_json::from_str(&body_text)
            .map_err(|e| ApiFailure::transport(format!("invalid JSON in response: {e}")))
    }
}

/// Best-effort extraction of a readable message from an error body:
/// `message`, then `error`, then the body itself.
fn extract_error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        for key in ["message", "error"] {
            if let Some(text) = value.get(key).and_then(Value::as_str) {
                return text.to_string();
            }
        }
        return value.to_string();
    }
    if body.trim().is_empty() {
        "Unknown error".to_string()
    } else {
        body.to_string()
    }
}
