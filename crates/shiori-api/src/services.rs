//! Per-resource operations: build a route, issue it, map the payload.

mod anime;
mod forum;
mod manga;
mod user;

pub use anime::AnimeService;
pub use forum::{ForumService, TopicQuery};
pub use manga::MangaService;
pub use user::{AnimeListPatch, MangaListPatch, UserService, ME};

use serde_json::Value;
use shiori_core::models::HttpErrorResponse;
use shiori_core::{CoreError, Outcome, RequestBuilder};
use url::Url;

use crate::error::ApiError;
use crate::http::HttpService;

/// Largest page size MAL accepts.
pub const MAX_LIMIT: u32 = 100;

/// What every resource operation returns.
pub type ApiOutcome<T> = Outcome<T, HttpErrorResponse>;

/// Fetch `request` and map the success payload with `map`.
///
/// A request that could not be assembled, or a payload of the wrong shape,
/// becomes a failure without reaching the caller as an `Err`.
async fn execute<T, E>(
    http: &HttpService,
    request: Result<RequestBuilder, E>,
    map: impl FnOnce(&Value) -> Result<T, CoreError>,
) -> ApiOutcome<T>
where
    E: Into<ApiError>,
{
    let request = match request {
        Ok(request) => request,
        Err(e) => {
            let error: ApiError = e.into();
            return Outcome::failure(error.into());
        }
    };

    match http.fetch(&request).await {
        Outcome::Success(response) => match map(&response.data) {
            Ok(value) => Outcome::success(value),
            Err(e) => {
                tracing::warn!(uri = request.uri(), error = %e, "unexpected MAL payload");
                Outcome::failure(ApiError::from(e).into())
            }
        },
        Outcome::Failure(error) => Outcome::failure(error),
    }
}

/// `limit` and `offset` query parameters for a page.
///
/// `None` uses the configured default limit; any limit is clamped to `1..=100`.
fn page_params(http: &HttpService, limit: Option<u32>, offset: u32) -> [(&'static str, String); 2] {
    let limit = limit.unwrap_or(http.default_limit()).clamp(1, MAX_LIMIT);
    [("limit", limit.to_string()), ("offset", offset.to_string())]
}

/// `nsfw=true` when the client opted into NSFW entries.
fn nsfw_param(http: &HttpService) -> Option<(&'static str, &'static str)> {
    http.nsfw().then_some(("nsfw", "true"))
}

fn require_non_blank(name: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        Err(ApiError::InvalidArgument(format!("{name} must not be empty")))
    } else {
        Ok(())
    }
}

/// Percent-encode a caller-supplied value as a single URL path segment.
///
/// `/`, `?`, `#` and `%` are escaped; `@` is kept so [`ME`] reaches MAL as-is.
fn path_segment(name: &str, value: &str) -> Result<String, ApiError> {
    let value = value.trim();
    if matches!(value, "" | "." | "..") {
        return Err(ApiError::InvalidArgument(format!(
            "{name} is not a valid path segment: {value:?}"
        )));
    }

    let mut url = Url::parse("http://localhost/")
        .map_err(|e| ApiError::InvalidArgument(format!("{name}: {e}")))?;
    url.path_segments_mut()
        .map_err(|()| ApiError::InvalidArgument(format!("{name}: cannot encode path")))?
        .clear()
        .push(value);
    Ok(url.path().trim_start_matches('/').to_owned())
}
