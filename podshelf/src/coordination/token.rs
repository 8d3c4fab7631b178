use chrono::Utc;

use crate::oauth2::{OAuth2Config, TokenBundle, refresh_access_token};
use crate::session::Session;

use super::errors::CoordinationError;

/// Returns a usable token bundle for the session, refreshing it when needed.
///
/// - no bundle in the session: `(TokenBundle::default(), false)`, no network call
/// - at least 60 seconds left: the stored bundle, no network call
/// - otherwise: exactly one refresh exchange; the refreshed bundle replaces the stored one
///
/// Whenever a bundle is returned it is written back into the session and the
/// session is marked dirty.
pub async fn get_valid_token(
    session: &mut Session,
    config: &OAuth2Config,
) -> Result<(TokenBundle, bool), CoordinationError> {
    get_valid_token_at(session, config, Utc::now().timestamp()).await
}

pub(crate) async fn get_valid_token_at(
    session: &mut Session,
    config: &OAuth2Config,
    now: i64,
) -> Result<(TokenBundle, bool), CoordinationError> {
    let Some(current) = session.token().cloned() else {
        tracing::debug!("No token in session");
        return Ok((TokenBundle::default(), false));
    };

    let bundle = if current.is_valid_at(now) {
        current
    } else {
        tracing::debug!(
            "Access token expires in {}s, refreshing",
            current.expires_at - now
        );
        refresh_access_token(config, &current, now).await?
    };

    session.set_token(bundle.clone());
    Ok((bundle, true))
}
