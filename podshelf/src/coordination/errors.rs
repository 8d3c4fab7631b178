use thiserror::Error;

use crate::catalog::CatalogError;
use crate::oauth2::OAuth2Error;
use crate::session::SessionError;
use crate::utils::UtilError;

/// Errors returned by the request-level operations
#[derive(Error, Debug)]
pub enum CoordinationError {
    /// The callback arrived without an authorization code
    #[error("Authorization code is missing")]
    MissingAuthorizationCode,

    /// The accounts service redirected back with an `error` parameter
    #[error("Authorization denied: {0}")]
    AuthorizationDenied(String),

    /// Error from OAuth2 operations
    #[error("OAuth2 error: {0}")]
    OAuth2Error(OAuth2Error),

    /// Error from catalog operations
    #[error("Catalog error: {0}")]
    CatalogError(CatalogError),

    /// Error from Session operations
    #[error("Session error: {0}")]
    SessionError(SessionError),

    /// Error from utils operations
    #[error("Utils error: {0}")]
    UtilsError(UtilError),
}

impl CoordinationError {
    /// Log the error and return self
    pub fn log(self) -> Self {
        match &self {
            Self::MissingAuthorizationCode => tracing::error!("Authorization code is missing"),
            Self::AuthorizationDenied(reason) => {
                tracing::error!("Authorization denied: {}", reason)
            }
            Self::OAuth2Error(err) => tracing::error!("OAuth2 error: {}", err),
            Self::CatalogError(err) => tracing::error!("Catalog error: {}", err),
            Self::SessionError(err) => tracing::error!("Session error: {}", err),
            Self::UtilsError(err) => tracing::error!("Utils error: {}", err),
        }
        self
    }
}

// Conversions from the module errors log on the way up

impl From<OAuth2Error> for CoordinationError {
    fn from(err: OAuth2Error) -> Self {
        let error = Self::OAuth2Error(err);
        tracing::error!("{}", error);
        error
    }
}

impl From<CatalogError> for CoordinationError {
    fn from(err: CatalogError) -> Self {
        let error = Self::CatalogError(err);
        tracing::error!("{}", error);
        error
    }
}

impl From<SessionError> for CoordinationError {
    fn from(err: SessionError) -> Self {
        let error = Self::SessionError(err);
        tracing::error!("{}", error);
        error
    }
}

impl From<UtilError> for CoordinationError {
    fn from(err: UtilError) -> Self {
        let error = Self::UtilsError(err);
        tracing::error!("{}", error);
        error
    }
}
