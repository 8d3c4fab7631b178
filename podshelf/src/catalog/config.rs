use std::env;

use super::errors::CatalogError;

/// Items requested per page from every listing endpoint.
pub const PAGE_SIZE: usize = 50;

/// Upper bound on pages fetched for one listing unless `CATALOG_MAX_PAGES` says otherwise.
pub const DEFAULT_MAX_PAGES: usize = 200;

const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub api_url: String,
    pub page_size: usize,
    pub max_pages: usize,
}

impl CatalogConfig {
    /// Creates a config from `SPOTIFY_API_URL` and `CATALOG_MAX_PAGES`.
    pub fn from_env() -> Result<Self, CatalogError> {
        let api_url = env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let max_pages = match env::var("CATALOG_MAX_PAGES") {
            Ok(value) => value.parse::<usize>().map_err(|_| {
                CatalogError::Config(format!("CATALOG_MAX_PAGES must be a number, got {value}"))
            })?,
            Err(_) => DEFAULT_MAX_PAGES,
        };
        if max_pages == 0 {
            return Err(CatalogError::Config(
                "CATALOG_MAX_PAGES must be at least 1".to_string(),
            ));
        }

        tracing::debug!("Catalog API: {}, max pages: {}", api_url, max_pages);
        Ok(Self::new(&api_url, max_pages))
    }

    pub fn new(api_url: &str, max_pages: usize) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            page_size: PAGE_SIZE,
            max_pages,
        }
    }
}
