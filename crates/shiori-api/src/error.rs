use shiori_core::models::HttpErrorResponse;
use shiori_core::CoreError;
use thiserror::Error;

/// Errors raised while preparing, sending or decoding a request.
///
/// Resource operations never return these directly; they are folded into an
/// [`HttpErrorResponse`] so every call yields an `Outcome`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("mapping error: {0}")]
    Core(#[from] CoreError),

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    /// Status reported when this error is folded into an [`HttpErrorResponse`].
    pub fn status(&self) -> u16 {
        match self {
            Self::InvalidArgument(_) => 400,
            Self::Http(e) => e.status().map_or(500, |s| s.as_u16()),
            _ => 500,
        }
    }
}

impl From<ApiError> for HttpErrorResponse {
    fn from(error: ApiError) -> Self {
        HttpErrorResponse::new(error.status(), error.to_string())
    }
}
