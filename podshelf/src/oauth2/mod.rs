mod config;
mod errors;
mod main;
mod types;

pub use config::{OAuth2Config, SPOTIFY_SCOPE, TOKEN_REFRESH_MARGIN_SECS};
pub use errors::OAuth2Error;
pub use types::{AuthResponse, TokenBundle};

pub(crate) use main::{build_authorize_url, exchange_code_for_token, refresh_access_token};
