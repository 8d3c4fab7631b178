use std::sync::Arc;

use podshelf::{CatalogConfig, OAuth2Config, SessionStore};

/// Shared state handed to every handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub oauth2: Arc<OAuth2Config>,
    pub catalog: Arc<CatalogConfig>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(oauth2: OAuth2Config, catalog: CatalogConfig, sessions: SessionStore) -> Self {
        Self {
            oauth2: Arc::new(oauth2),
            catalog: Arc::new(catalog),
            sessions,
        }
    }

    /// Builds the state from the process environment, connecting to the
    /// session store selected by `SESSION_STORE_TYPE`.
    pub async fn from_env() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let oauth2 = OAuth2Config::from_env()?;
        let catalog = CatalogConfig::from_env()?;
        let sessions = SessionStore::from_env().await?;
        tracing::info!("Session store ready: {:?}", sessions);
        Ok(Self::new(oauth2, catalog, sessions))
    }
}
