// ============================================================================
// HTTP CLIENTS - PublicApi (no credentials) and AuthApi (bearer + 401/403)
// ============================================================================
// Central error policy: every failed call produces exactly one user-visible
// outcome - either an ApiError toast event, or (401 through AuthApi) a
// storage wipe plus a SessionExpired broadcast. Never both. Callers get the
// typed error back and may add contextual handling, but no caller can
// suppress the notification.
// ============================================================================

use gloo_net::http::{Method, Request, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};

use crate::events::{self, AppEvent};
use crate::stores::session;
use crate::utils::{LocalStorage, API_BASE_URL};

pub const MSG_GENERIC: &str = "Có lỗi xảy ra";
pub const MSG_UNREACHABLE: &str = "Không thể kết nối đến server. Vui lòng kiểm tra kết nối.";
pub const MSG_FORBIDDEN: &str = "Bạn không có quyền thực hiện thao tác này.";

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request went out but no response came back.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}")]
    Http { status: u16, message: Option<String> },
    /// The request could not be built, or a 2xx body failed to decode.
    #[error("request setup error: {0}")]
    Setup(String),
}

/// What the user sees for a given failure.
#[derive(Clone, Debug, PartialEq)]
pub enum ErrorAction {
    Notify(String),
    /// 401 on the authenticated client: wipe the session, prompt login.
    ExpireSession,
}

/// Pure mapping from failure to user-facing outcome. `authed` is true for
/// requests that went through `AuthApi` - only those interpret 401/403.
pub fn classify(error: &ApiError, authed: bool) -> ErrorAction {
    match error {
        ApiError::Http { status: 401, .. } if authed => ErrorAction::ExpireSession,
        ApiError::Http { status: 403, .. } if authed => {
            // Fixed message on purpose; the server's own text is ignored here.
            ErrorAction::Notify(MSG_FORBIDDEN.to_string())
        }
        ApiError::Http { message, .. } => {
            ErrorAction::Notify(message.clone().unwrap_or_else(|| MSG_GENERIC.to_string()))
        }
        ApiError::Network(_) => ErrorAction::Notify(MSG_UNREACHABLE.to_string()),
        ApiError::Setup(_) => ErrorAction::Notify(MSG_GENERIC.to_string()),
    }
}

fn fail(error: ApiError, authed: bool) -> ApiError {
    log::error!("❌ API error (authed={}): {}", authed, error);
    match classify(&error, authed) {
        ErrorAction::ExpireSession => {
            session::clear_session(&LocalStorage);
            events::publish(AppEvent::SessionExpired);
        }
        ErrorAction::Notify(message) => events::publish(AppEvent::ApiError(message)),
    }
    error
}

/// Setup failure raised outside the request pipeline (e.g. FormData
/// construction). Goes through the same notification policy.
pub(crate) fn setup_failure(message: impl Into<String>) -> ApiError {
    fail(ApiError::Setup(message.into()), true)
}

/// Error body shape the backend uses; either field may carry the message.
#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

fn url_for(path: &str) -> String {
    format!("{}{}", API_BASE_URL, path)
}

async fn execute<T: DeserializeOwned>(
    request: Result<Request, gloo_net::Error>,
    authed: bool,
) -> Result<T, ApiError> {
    let request = request.map_err(|e| fail(ApiError::Setup(e.to_string()), authed))?;
    let response = request
        .send()
        .await
        .map_err(|e| fail(ApiError::Network(e.to_string()), authed))?;

    if !response.ok() {
        let status = response.status();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message.or(body.error));
        return Err(fail(ApiError::Http { status, message }, authed));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| fail(ApiError::Setup(format!("parse error: {}", e)), authed))
}

/// Client for the public endpoints (no credentials attached).
pub struct PublicApi;

impl PublicApi {
    pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
        execute(Request::get(&url_for(path)).build(), false).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
        execute(Request::post(&url_for(path)).json(body), false).await
    }
}

/// Client for authenticated endpoints. Attaches the stored bearer token to
/// every request; a missing token is not an error at this layer (the server
/// enforces authorization and answers 401).
pub struct AuthApi;

impl AuthApi {
    fn builder(method: Method, path: &str) -> RequestBuilder {
        let mut builder = RequestBuilder::new(&url_for(path)).method(method);
        if let Some(token) = session::stored_token(&LocalStorage) {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }
        builder
    }

    pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
        execute(Self::builder(Method::GET, path).build(), true).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
        execute(Self::builder(Method::POST, path).json(body), true).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
        execute(Self::builder(Method::PUT, path).json(body), true).await
    }

    pub async fn delete<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
        execute(Self::builder(Method::DELETE, path).build(), true).await
    }

    /// Multipart upload. The upload endpoints answer with the stored file's
    /// URL as a bare string rather than the usual envelope.
    pub async fn post_multipart(path: &str, form: &web_sys::FormData) -> Result<String, ApiError> {
        let request = Self::builder(Method::POST, path)
            .body(form.clone())
            .map_err(|e| fail(ApiError::Setup(e.to_string()), true))?;
        let response = request
            .send()
            .await
            .map_err(|e| fail(ApiError::Network(e.to_string()), true))?;

        if !response.ok() {
            let status = response.status();
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message.or(body.error));
            return Err(fail(ApiError::Http { status, message }, true));
        }

        let text = response
            .text()
            .await
            .map_err(|e| fail(ApiError::Setup(e.to_string()), true))?;
        // Some deployments JSON-quote the URL.
        Ok(text.trim().trim_matches('"').to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16, message: Option<&str>) -> ApiError {
        ApiError::Http {
            status,
            message: message.map(|m| m.to_string()),
        }
    }

    #[test]
    fn unauthorized_on_auth_client_expires_the_session() {
        assert_eq!(classify(&http(401, Some("expired")), true), ErrorAction::ExpireSession);
    }

    #[test]
    fn unauthorized_on_public_client_is_an_ordinary_error() {
        assert_eq!(
            classify(&http(401, Some("expired")), false),
            ErrorAction::Notify("expired".to_string())
        );
    }

    #[test]
    fn forbidden_uses_the_fixed_message_not_the_servers() {
        assert_eq!(
            classify(&http(403, Some("custom server text")), true),
            ErrorAction::Notify(MSG_FORBIDDEN.to_string())
        );
    }

    #[test]
    fn server_message_preferred_with_generic_fallback() {
        assert_eq!(
            classify(&http(500, Some("DB down")), true),
            ErrorAction::Notify("DB down".to_string())
        );
        assert_eq!(
            classify(&http(500, None), false),
            ErrorAction::Notify(MSG_GENERIC.to_string())
        );
    }

    #[test]
    fn transport_failure_reads_cannot_reach_server() {
        let error = ApiError::Network("timeout".into());
        for authed in [true, false] {
            assert_eq!(
                classify(&error, authed),
                ErrorAction::Notify(MSG_UNREACHABLE.to_string())
            );
        }
    }

    #[test]
    fn setup_failure_falls_back_to_generic() {
        assert_eq!(
            classify(&ApiError::Setup("bad body".into()), true),
            ErrorAction::Notify(MSG_GENERIC.to_string())
        );
    }
}
