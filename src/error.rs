use thiserror::Error;

/// Fatal configuration problems. The server refuses to start without a
/// credential; everything else is reported back to the caller as text.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "SUBMAGIC_API_KEY environment variable is required. \
         Get your API key from https://app.submagic.co/signup"
    )]
    MissingApiKey,
}

/// A rejected input field, reported before any network call is attempted.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{field}: {constraint}")]
pub struct ValidationError {
    pub field: &'static str,
    pub constraint: String,
}

impl ValidationError {
    pub fn new(field: &'static str, constraint: impl Into<String>) -> Self {
        Self {
            field,
            constraint: constraint.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    RateLimited,
    AuthenticationFailed,
    /// Non-2xx status not covered by a more specific kind.
    Api(u16),
    Timeout,
    Transport,
}

/// A failed API call, kept as data so the tool surface can render it as
/// text. Nothing past the dispatcher ever sees a raw transport error.
#[derive(Debug, Clone)]
pub struct ApiFailure {
    pub kind: FailureKind,
    pub message: String,
    pub suggestion: Option<String>,
}

impl ApiFailure {
    pub fn rate_limited() -> Self {
        Self {
            kind: FailureKind::RateLimited,
            message: "You've hit the rate limit for this operation. Please wait and try again.\n\n\
                      Rate limits:\n\
                      - lightweight operations: 1000 requests/hour\n\
                      - standard operations: 500 requests/hour\n\
                      - upload operations: 500 requests/hour"
                .to_string(),
            suggestion: None,
        }
    }

    pub fn authentication_failed() -> Self {
        Self {
            kind: FailureKind::AuthenticationFailed,
            message: "Invalid API key. Check your SUBMAGIC_API_KEY environment variable."
                .to_string(),
            suggestion: None,
        }
    }

    /// The credential disappeared between startup and this call.
    pub fn missing_credential(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::AuthenticationFailed,
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Api(status),
            message: message.into(),
            suggestion: Some(
                "Check the API documentation at https://docs.submagic.co for more details."
                    .to_string(),
            ),
        }
    }

    pub fn timeout() -> Self {
        Self {
            kind: FailureKind::Timeout,
            message: "The request took too long to complete. The video might be too large \
                      or the server is busy."
                .to_string(),
            suggestion: Some(
                "Try with a smaller video or wait a few minutes and retry.".to_string(),
            ),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Transport,
            message: message.into(),
            suggestion: Some(
                "Check your internet connection and API key configuration.".to_string(),
            ),
        }
    }

    pub fn headline(&self) -> String {
        match self.kind {
            FailureKind::RateLimited => "Rate limit exceeded".to_string(),
            FailureKind::AuthenticationFailed => "Authentication failed".to_string(),
            FailureKind::Api(status) => format!("API Error ({status})"),
            FailureKind::Timeout => "Request timeout".to_string(),
            FailureKind::Transport => "Request failed".to_string(),
        }
    }

    /// The text block handed back to the calling host.
    pub fn render(&self) -> String {
        let mut out = format!("Error: {}\n{}", self.headline(), self.message);
        if let Some(suggestion) = &self.suggestion {
            out.push_str("\n\n");
            out.push_str(suggestion);
        }
        out
    }
}
