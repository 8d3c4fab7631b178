use chrono::Utc;

use crate::oauth2::{OAuth2Config, build_authorize_url, exchange_code_for_token};
use crate::session::{Session, SessionStore};

use super::errors::CoordinationError;

/// URL of the accounts-service consent page the browser should be sent to.
pub fn begin_authorization(config: &OAuth2Config) -> Result<String, CoordinationError> {
    Ok(build_authorize_url(config)?)
}

/// Finishes the authorization code flow for `session`.
///
/// Any earlier session state is discarded first, even when the callback
/// carries no code: the stored record is deleted and the session continues
/// under a new id. The code is then exchanged for a token bundle, which is
/// stored in the session. The caller persists the session with
/// [`SessionStore::save`].
pub async fn complete_authorization(
    store: &SessionStore,
    session: &mut Session,
    config: &OAuth2Config,
    code: Option<&str>,
) -> Result<(), CoordinationError> {
    store.clear(session).await?;

    let code = code
        .filter(|code| !code.is_empty())
        .ok_or(CoordinationError::MissingAuthorizationCode)?;

    let bundle = exchange_code_for_token(config, code, Utc::now().timestamp()).await?;
    tracing::debug!("Token stored, expires at {}", bundle.expires_at);
    session.set_token(bundle);

    Ok(())
}
