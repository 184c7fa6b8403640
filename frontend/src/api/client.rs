//! Central request plumbing.
//!
//! Every call goes through here so that error classification and forced
//! session invalidation happen in exactly one place. The client performs
//! no retries; callers decide whether a failed request is worth repeating
//! (for authenticated endpoints it almost never is, since a dead session
//! fails every attempt the same way).

use std::cell::Cell;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use web_sys::RequestCredentials;

use crate::locale::Locale;
use crate::store;

/// Backend base URL, fixed at build time.
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "/api",
};

/// Client-perceived error taxonomy. Callers match on the variant (or
/// [`ApiError::status`]), never on message text.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    Unauthorized { status: u16, message: String },
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    PayloadTooLarge(String),
    #[error("network error: unable to reach the server at {base_url}")]
    NetworkUnreachable { base_url: String },
    #[error("{message}")]
    Unknown { status: Option<u16>, message: String },
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { status, .. } => Some(*status),
            ApiError::NotFound(_) => Some(404),
            ApiError::BadRequest(_) => Some(400),
            ApiError::PayloadTooLarge(_) => Some(413),
            ApiError::NetworkUnreachable { .. } => None,
            ApiError::Unknown { status, .. } => *status,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestOpts {
    /// Skip the session cookie and the central 401 handling. Used by the
    /// public endpoints and by calls that manage the session themselves.
    pub skip_auth: bool,
}

impl RequestOpts {
    pub fn public() -> Self {
        Self { skip_auth: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectState {
    Idle,
    Redirecting,
}

/// One-shot latch around the forced-logout navigation: under concurrent
/// 401 failures only the first caller issues the redirect.
pub struct RedirectGuard {
    state: Cell<RedirectState>,
}

impl RedirectGuard {
    pub const fn new() -> Self {
        Self {
            state: Cell::new(RedirectState::Idle),
        }
    }

    /// Returns `true` exactly once; all later calls observe the redirect
    /// already underway.
    pub fn begin(&self) -> bool {
        match self.state.get() {
            RedirectState::Idle => {
                self.state.set(RedirectState::Redirecting);
                true
            }
            RedirectState::Redirecting => false,
        }
    }

    pub fn state(&self) -> RedirectState {
        self.state.get()
    }
}

thread_local! {
    static REDIRECT_GUARD: RedirectGuard = const { RedirectGuard::new() };
}

/// Error body shape used by the backend; either field may carry the
/// human-readable message.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

fn server_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    parsed
        .message
        .or(parsed.error)
        .filter(|message| !message.is_empty())
}

/// Maps a non-2xx status plus raw error body to the typed taxonomy, with
/// status-specific fallback messages when the server provides none.
pub(crate) fn classify_failure(status: u16, body: &str) -> ApiError {
    let message = server_message(body);
    match status {
        401 | 403 => ApiError::Unauthorized {
            status,
            message: message.unwrap_or_else(|| "Unauthorized".to_string()),
        },
        404 => ApiError::NotFound(message.unwrap_or_else(|| "Resource not found".to_string())),
        400 => ApiError::BadRequest(message.unwrap_or_else(|| "Bad request".to_string())),
        413 => ApiError::PayloadTooLarge(
            message.unwrap_or_else(|| "File size exceeds limit".to_string()),
        ),
        other => ApiError::Unknown {
            status: Some(other),
            message: message.unwrap_or_else(|| format!("Request failed with status {other}")),
        },
    }
}

/// Forced session invalidation after a 401: clear the cache and replace the
/// current history entry with the locale-prefixed login route. Replacing
/// (not pushing) keeps the dead page out of the back stack. No-op when the
/// login page itself is showing, and at most once per page lifetime.
fn force_logout() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let path = location.pathname().unwrap_or_default();
    if path.contains("/login") {
        return;
    }

    let first = REDIRECT_GUARD.with(|guard| guard.begin());
    if !first {
        return;
    }

    store::store().clear_auth();
    let locale = Locale::from_path(&path);
    if let Err(err) = location.replace(&format!("/{locale}/login")) {
        gloo_console::error!("failed to redirect to login:", err);
    }
}

fn url(endpoint: &str) -> String {
    format!("{API_BASE_URL}{endpoint}")
}

fn with_credentials(builder: RequestBuilder, opts: RequestOpts) -> RequestBuilder {
    let credentials = if opts.skip_auth {
        RequestCredentials::Omit
    } else {
        RequestCredentials::Include
    };
    builder.credentials(credentials)
}

fn build_error(err: gloo_net::Error) -> ApiError {
    ApiError::Unknown {
        status: None,
        message: err.to_string(),
    }
}

/// Sends a built request and applies the classification rules. A fetch
/// level failure (connection refused, DNS, CORS) is distinct from any
/// server-returned error and names the configured base URL.
async fn dispatch(request: Request, endpoint: &str, opts: RequestOpts) -> Result<Response, ApiError> {
    let response = request.send().await.map_err(|_| ApiError::NetworkUnreachable {
        base_url: API_BASE_URL.to_string(),
    })?;

    let status = response.status();
    if (200..300).contains(&status) {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let error = classify_failure(status, &body);

    let is_logout = endpoint.starts_with("/auth/logout");
    if status == 401 && !opts.skip_auth && !is_logout {
        force_logout();
    }

    Err(error)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|err| ApiError::Unknown {
        status: None,
        message: format!("invalid response body: {err}"),
    })
}

pub async fn get_json<T: DeserializeOwned>(endpoint: &str, opts: RequestOpts) -> Result<T, ApiError> {
    let request = with_credentials(Request::get(&url(endpoint)), opts)
        .build()
        .map_err(build_error)?;
    let response = dispatch(request, endpoint, opts).await?;
    read_json(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    endpoint: &str,
    body: &B,
    opts: RequestOpts,
) -> Result<T, ApiError> {
    let request = with_credentials(Request::post(&url(endpoint)), opts)
        .json(body)
        .map_err(build_error)?;
    let response = dispatch(request, endpoint, opts).await?;
    read_json(response).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    endpoint: &str,
    body: &B,
    opts: RequestOpts,
) -> Result<T, ApiError> {
    let request = with_credentials(Request::put(&url(endpoint)), opts)
        .json(body)
        .map_err(build_error)?;
    let response = dispatch(request, endpoint, opts).await?;
    read_json(response).await
}

/// POST with a JSON body where the response carries no payload (200/204).
pub async fn post_json_unit<B: Serialize>(
    endpoint: &str,
    body: &B,
    opts: RequestOpts,
) -> Result<(), ApiError> {
    let request = with_credentials(Request::post(&url(endpoint)), opts)
        .json(body)
        .map_err(build_error)?;
    dispatch(request, endpoint, opts).await?;
    Ok(())
}

/// POST with no body and no payload in the response.
pub async fn post_empty(endpoint: &str, opts: RequestOpts) -> Result<(), ApiError> {
    let request = with_credentials(Request::post(&url(endpoint)), opts)
        .build()
        .map_err(build_error)?;
    dispatch(request, endpoint, opts).await?;
    Ok(())
}

/// POST with no body but a JSON response (the SMTP probe).
pub async fn post_empty_json<T: DeserializeOwned>(
    endpoint: &str,
    opts: RequestOpts,
) -> Result<T, ApiError> {
    let request = with_credentials(Request::post(&url(endpoint)), opts)
        .build()
        .map_err(build_error)?;
    let response = dispatch(request, endpoint, opts).await?;
    read_json(response).await
}

/// Multipart POST. The content type is left unset so the transport fills
/// in the boundary header itself.
pub async fn post_form(
    endpoint: &str,
    form: web_sys::FormData,
    opts: RequestOpts,
) -> Result<(), ApiError> {
    let request = with_credentials(Request::post(&url(endpoint)), opts)
        .body(form)
        .map_err(build_error)?;
    dispatch(request, endpoint, opts).await?;
    Ok(())
}

pub async fn delete(endpoint: &str, opts: RequestOpts) -> Result<(), ApiError> {
    let request = with_credentials(Request::delete(&url(endpoint)), opts)
        .build()
        .map_err(build_error)?;
    dispatch(request, endpoint, opts).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_guard_fires_once() {
        let guard = RedirectGuard::new();
        assert_eq!(guard.state(), RedirectState::Idle);
        assert!(guard.begin());
        assert_eq!(guard.state(), RedirectState::Redirecting);
        // concurrent failures observe the redirect already underway
        assert!(!guard.begin());
        assert!(!guard.begin());
    }

    #[test]
    fn classifies_auth_failures_with_server_message() {
        let err = classify_failure(401, r#"{"message":"session expired"}"#);
        match err {
            ApiError::Unauthorized { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "session expired");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn classifies_by_status_with_fallback_messages() {
        assert!(matches!(classify_failure(403, ""), ApiError::Unauthorized { status: 403, .. }));
        assert!(matches!(classify_failure(404, "gone"), ApiError::NotFound(_)));
        assert!(matches!(classify_failure(400, ""), ApiError::BadRequest(_)));
        assert!(matches!(classify_failure(413, ""), ApiError::PayloadTooLarge(_)));
        match classify_failure(500, "") {
            ApiError::Unknown { status, message } => {
                assert_eq!(status, Some(500));
                assert_eq!(message, "Request failed with status 500");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn prefers_message_over_error_field() {
        let err = classify_failure(400, r#"{"error":"bad","message":"title is required"}"#);
        assert_eq!(err.to_string(), "title is required");

        let err = classify_failure(400, r#"{"error":"title is required"}"#);
        assert_eq!(err.to_string(), "title is required");
    }

    #[test]
    fn non_json_error_bodies_fall_back_by_status() {
        let err = classify_failure(404, "<html>not found</html>");
        assert_eq!(err.to_string(), "Resource not found");
        assert_eq!(err.status(), Some(404));
    }
}
