use axum::{
    extract::FromRequestParts,
    response::{IntoResponse, Redirect, Response},
};
use http::request::Parts;
use podshelf::Session;

use super::error::IntoResponseError;
use super::state::AppState;

/// Where unauthenticated visitors are sent to start the authorization flow.
pub(crate) const VERIFY_PATH: &str = "/verify";

/// Response for a content request whose session holds no token.
pub struct AuthRedirect;

impl IntoResponse for AuthRedirect {
    fn into_response(self) -> Response {
        tracing::debug!("Redirecting to {}", VERIFY_PATH);
        Redirect::to(VERIFY_PATH).into_response()
    }
}

/// The caller's session, loaded from the store named by the session cookie.
///
/// Requests without a usable cookie get a fresh, unsaved session. Handlers
/// that change it write it back with
/// [`SessionStore::save`](podshelf::SessionStore::save).
#[derive(Debug)]
pub struct SessionContext(pub Session);

impl FromRequestParts<AppState> for SessionContext {
    type Rejection = (http::StatusCode, String);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = state
            .sessions
            .load(&parts.headers)
            .await
            .into_response_error()?;
        Ok(Self(session))
    }
}
