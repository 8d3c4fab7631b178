use crate::catalog::{CatalogConfig, Episode, SavedShow, fetch_saved_shows, fetch_show_episodes};
use crate::oauth2::TokenBundle;

use super::errors::CoordinationError;

pub async fn list_saved_shows_core(
    config: &CatalogConfig,
    token: &TokenBundle,
) -> Result<Vec<SavedShow>, CoordinationError> {
    Ok(fetch_saved_shows(config, &token.access_token).await?)
}

pub async fn list_show_episodes_core(
    config: &CatalogConfig,
    token: &TokenBundle,
    show_id: &str,
) -> Result<Vec<Episode>, CoordinationError> {
    Ok(fetch_show_episodes(config, &token.access_token, show_id).await?)
}
