use crate::oauth2::config::OAuth2Config;
use crate::oauth2::errors::OAuth2Error;
use crate::oauth2::types::{TokenBundle, TokenResponse};
use crate::utils::get_client;

/// Swaps a one-time authorization code for a new token bundle.
pub(crate) async fn exchange_code_for_token(
    config: &OAuth2Config,
    code: &str,
    now: i64,
) -> Result<TokenBundle, OAuth2Error> {
    let response = request_token(
        config,
        &[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", config.redirect_uri.as_str()),
        ],
    )
    .await
    .map_err(OAuth2Error::TokenExchange)?;

    response.into_bundle(now, None)
}

/// Swaps the refresh token of `current` for a new access token.
pub(crate) async fn refresh_access_token(
    config: &OAuth2Config,
    current: &TokenBundle,
    now: i64,
) -> Result<TokenBundle, OAuth2Error> {
    let response = request_token(
        config,
        &[
            ("grant_type", "refresh_token"),
            ("refresh_token", current.refresh_token.as_str()),
        ],
    )
    .await
    .map_err(OAuth2Error::TokenRefresh)?;

    response.into_bundle(now, Some(current))
}

async fn request_token(
    config: &OAuth2Config,
    form: &[(&str, &str)],
) -> Result<TokenResponse, String> {
    let client = get_client().map_err(|e| e.to_string())?;
    let response = client
        .post(config.token_url.as_str())
        .basic_auth(&config.client_id, Some(&config.client_secret))
        .form(form)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::debug!("Token endpoint returned {}: {}", status, body);
        return Err(format!("{status}: {body}"));
    }

    let response_body = response.text().await.map_err(|e| e.to_string())?;
    serde_json::from_str(&response_body)
        .map_err(|e| format!("Failed to deserialize token response: {e}"))
}
