use url::Url;

use crate::oauth2::config::OAuth2Config;
use crate::oauth2::errors::OAuth2Error;

/// Builds the accounts-service URL the browser is sent to for consent.
pub(crate) fn build_authorize_url(config: &OAuth2Config) -> Result<String, OAuth2Error> {
    let mut url = Url::parse(&config.auth_url)
        .map_err(|e| OAuth2Error::InvalidUrl(format!("{}: {e}", config.auth_url)))?;

    {
        let mut query = url.query_pairs_mut();
        query
            .append_pair("client_id", &config.client_id)
            .append_pair("response_type", "code")
            .append_pair("redirect_uri", &config.redirect_uri)
            .append_pair("scope", &config.scope);
        if config.show_dialog {
            query.append_pair("show_dialog", "true");
        }
    }

    tracing::debug!("Auth URL: {}", url);
    Ok(url.into())
}
