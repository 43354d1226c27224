use serde::Serialize;
use serde_json::Value;

/// A 2xx response with its decoded JSON payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HttpSuccessResponse {
    pub status: u16,
    pub message: String,
    pub data: Value,
}

/// A failed call: non-2xx status, or status 500 for network and decoding failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HttpErrorResponse {
    pub status: u16,
    pub message: String,
}

impl HttpErrorResponse {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for HttpErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "API error (status {}): {}", self.status, self.message)
    }
}

impl std::error::Error for HttpErrorResponse {}
