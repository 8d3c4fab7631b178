use std::env;

use super::errors::OAuth2Error;

/// Read-only permissions requested from the user: saved library and playback positions.
pub const SPOTIFY_SCOPE: &str = "user-library-read user-read-playback-position";

/// A token is refreshed once fewer than this many seconds remain before it expires.
pub const TOKEN_REFRESH_MARGIN_SECS: i64 = 60;

const DEFAULT_ACCOUNTS_URL: &str = "https://accounts.spotify.com";

/// Client identity and endpoints for the authorization code flow.
///
/// Passed explicitly into every exchange so no credential-bearing object
/// outlives a single call or is shared between sessions.
#[derive(Clone)]
pub struct OAuth2Config {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub scope: String,
    pub show_dialog: bool,
    pub auth_url: String,
    pub token_url: String,
}

impl std::fmt::Debug for OAuth2Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuth2Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[redacted]")
            .field("redirect_uri", &self.redirect_uri)
            .field("scope", &self.scope)
            .field("show_dialog", &self.show_dialog)
            .field("auth_url", &self.auth_url)
            .field("token_url", &self.token_url)
            .finish()
    }
}

impl OAuth2Config {
    /// Creates a config from `SPOTIFY_CLIENT_ID`, `SPOTIFY_CLIENT_SECRET`, `ORIGIN`,
    /// `SPOTIFY_ACCOUNTS_URL` and `OAUTH2_SHOW_DIALOG`.
    pub fn from_env() -> Result<Self, OAuth2Error> {
        let client_id = env::var("SPOTIFY_CLIENT_ID")
            .map_err(|_| OAuth2Error::Config("SPOTIFY_CLIENT_ID must be set".to_string()))?;
        let client_secret = env::var("SPOTIFY_CLIENT_SECRET")
            .map_err(|_| OAuth2Error::Config("SPOTIFY_CLIENT_SECRET must be set".to_string()))?;
        let origin =
            env::var("ORIGIN").map_err(|_| OAuth2Error::Config("ORIGIN must be set".to_string()))?;
        let accounts_url =
            env::var("SPOTIFY_ACCOUNTS_URL").unwrap_or_else(|_| DEFAULT_ACCOUNTS_URL.to_string());
        let show_dialog = parse_show_dialog(env::var("OAUTH2_SHOW_DIALOG").ok().as_deref())?;

        let config = Self::new(
            client_id,
            client_secret,
            &origin,
            &accounts_url,
            show_dialog,
        );
        config.validate()?;
        Ok(config)
    }

    /// Builds a config whose redirect target is `{origin}/callback` and whose
    /// endpoints live under `accounts_url`.
    pub fn new(
        client_id: String,
        client_secret: String,
        origin: &str,
        accounts_url: &str,
        show_dialog: bool,
    ) -> Self {
        let origin = origin.trim_end_matches('/');
        let accounts_url = accounts_url.trim_end_matches('/');
        Self {
            client_id,
            client_secret,
            redirect_uri: format!("{origin}/callback"),
            scope: SPOTIFY_SCOPE.to_string(),
            show_dialog,
            auth_url: format!("{accounts_url}/authorize"),
            token_url: format!("{accounts_url}/api/token"),
        }
    }

    pub fn validate(&self) -> Result<(), OAuth2Error> {
        if self.client_id.is_empty() {
            return Err(OAuth2Error::Config("Client id cannot be empty".to_string()));
        }
        if self.client_secret.is_empty() {
            return Err(OAuth2Error::Config(
                "Client secret cannot be empty".to_string(),
            ));
        }
        if !self.redirect_uri.starts_with("http://") && !self.redirect_uri.starts_with("https://") {
            return Err(OAuth2Error::Config(format!(
                "ORIGIN must be an http(s) URL, got redirect uri {}",
                self.redirect_uri
            )));
        }
        Ok(())
    }
}

fn parse_show_dialog(value: Option<&str>) -> Result<bool, OAuth2Error> {
    match value {
        None => Ok(false),
        Some(v) => match v.to_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            invalid => Err(OAuth2Error::Config(format!(
                "Invalid OAUTH2_SHOW_DIALOG: {invalid}. Valid values are: true, false"
            ))),
        },
    }
}
