use serde::{Deserialize, Serialize};

use super::config::TOKEN_REFRESH_MARGIN_SECS;
use super::errors::OAuth2Error;

/// Access/refresh token pair issued by the accounts service, with its absolute expiry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBundle {
    pub access_token: String,
    pub refresh_token: String,
    /// Expiry as seconds since the Unix epoch
    pub expires_at: i64,
    pub scope: String,
}

impl TokenBundle {
    /// True when at least [`TOKEN_REFRESH_MARGIN_SECS`] remain before expiry at `now`.
    pub fn is_valid_at(&self, now: i64) -> bool {
        self.expires_at - now >= TOKEN_REFRESH_MARGIN_SECS
    }
}

/// Query parameters the accounts service appends to the redirect back to `/callback`.
#[derive(Debug, Default, Deserialize)]
pub struct AuthResponse {
    pub code: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct TokenResponse {
    pub(super) access_token: String,
    pub(super) expires_in: i64,
    pub(super) refresh_token: Option<String>,
    pub(super) scope: Option<String>,
}

impl TokenResponse {
    /// Converts the response into a bundle expiring `expires_in` seconds after `now`.
    ///
    /// Refresh responses may omit the refresh token and scope; the values from
    /// `previous` are carried over in that case.
    pub(super) fn into_bundle(
        self,
        now: i64,
        previous: Option<&TokenBundle>,
    ) -> Result<TokenBundle, OAuth2Error> {
        let refresh_token = match (self.refresh_token, previous) {
            (Some(token), _) => token,
            (None, Some(previous)) => previous.refresh_token.clone(),
            (None, None) => {
                return Err(OAuth2Error::TokenExchange(
                    "Refresh token not present in response".to_string(),
                ));
            }
        };
        let scope = match (self.scope, previous) {
            (Some(scope), _) => scope,
            (None, Some(previous)) => previous.scope.clone(),
            (None, None) => String::new(),
        };

        Ok(TokenBundle {
            access_token: self.access_token,
            refresh_token,
            expires_at: now + self.expires_in,
            scope,
        })
    }
}
