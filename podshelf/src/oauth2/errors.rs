use crate::utils::UtilError;
use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum OAuth2Error {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid url: {0}")]
    InvalidUrl(String),

    #[error("Token exchange error: {0}")]
    TokenExchange(String),

    #[error("Token refresh error: {0}")]
    TokenRefresh(String),

    /// Error from utils operations
    #[error("Utils error: {0}")]
    Utils(#[from] UtilError),
}
