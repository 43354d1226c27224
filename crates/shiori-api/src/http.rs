use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde_json::Value;
use shiori_core::models::{HttpErrorResponse, HttpSuccessResponse};
use shiori_core::vocabulary::HttpMethod;
use shiori_core::{Outcome, RequestBuilder};
use url::Url;

use crate::config::{ClientConfig, Credentials};
use crate::error::ApiError;

const SUCCESS_MESSAGE: &str = "Success.";

/// Session wrapper that turns a [`RequestBuilder`] into one HTTP call.
///
/// Holds the credential and the per-client paging defaults shared by every
/// resource service.
#[derive(Debug, Clone)]
pub struct HttpService {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
    default_limit: u32,
    nsfw: bool,
}

impl HttpService {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Self::with_client(config, http)
    }

    /// Build on top of a caller-supplied `reqwest::Client` (proxies, TLS, ...).
    pub fn with_client(config: &ClientConfig, http: reqwest::Client) -> Result<Self, ApiError> {
        let base = Url::parse(&config.base_url)
            .map_err(|e| ApiError::Config(format!("invalid base_url {:?}: {e}", config.base_url)))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(ApiError::Config(format!(
                "unsupported base_url scheme: {}",
                base.scheme()
            )));
        }

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            credentials: config.credentials()?,
            default_limit: config.default_limit,
            nsfw: config.nsfw,
        })
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn default_limit(&self) -> u32 {
        self.default_limit
    }

    pub fn nsfw(&self) -> bool {
        self.nsfw
    }

    /// Absolute URL for a route URI.
    pub fn url_for(&self, uri: &str) -> String {
        format!("{}/{}", self.base_url, uri.trim_start_matches('/'))
    }

    /// Issue the request and classify the response.
    ///
    /// Never panics and never retries. Network and decoding failures are
    /// reported as a failure with status 500.
    pub async fn fetch(
        &self,
        request: &RequestBuilder,
    ) -> Outcome<HttpSuccessResponse, HttpErrorResponse> {
        match self.send(request).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(uri = request.uri(), error = %e, "MAL request failed");
                Outcome::failure(HttpErrorResponse::new(500, e.to_string()))
            }
        }
    }

    async fn send(
        &self,
        request: &RequestBuilder,
    ) -> Result<Outcome<HttpSuccessResponse, HttpErrorResponse>, ApiError> {
        let url = self.url_for(request.uri());
        tracing::debug!(method = %request.method(), %url, "MAL request");

        let (header, value) = self.credentials.header();
        let mut builder = self
            .http
            .request(method_of(request.method()), &url)
            .header(header, value);
        if !request.query().is_empty() {
            builder = builder.query(request.query());
        }
        // MAL requires form-encoded bodies, not JSON.
        if !request.body().is_empty() {
            builder = builder.form(request.body());
        }

        let resp = builder.send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        if status.is_success() {
            let data = if text.trim().is_empty() {
                Value::Null
            } else {
                serde_json::from_str(&text)?
            };
            Ok(Outcome::success(HttpSuccessResponse {
                status: status.as_u16(),
                message: SUCCESS_MESSAGE.to_owned(),
                data,
            }))
        } else {
            tracing::warn!(status = status.as_u16(), "MAL API error");
            Ok(Outcome::failure(HttpErrorResponse::new(
                status.as_u16(),
                error_message(status, &text),
            )))
        }
    }
}

fn method_of(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// Human-readable message for a non-2xx body.
///
/// MAL errors look like `{"error": "not_found", "message": ""}`; anything
/// else is passed through as text.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(Value::Object(payload)) = serde_json::from_str::<Value>(body) {
        let error = payload.get("error").and_then(Value::as_str).filter(|s| !s.is_empty());
        let message = payload.get("message").and_then(Value::as_str).filter(|s| !s.is_empty());
        match (error, message) {
            (Some(error), Some(message)) => return format!("{error}: {message}"),
            (Some(error), None) => return error.to_owned(),
            (None, Some(message)) => return message.to_owned(),
            (None, None) => {}
        }
    }

    let body = body.trim();
    if body.is_empty() {
        status.canonical_reason().unwrap_or("request failed").to_owned()
    } else {
        body.to_owned()
    }
}
