use serde::de::DeserializeOwned;
use url::Url;

use crate::catalog::config::CatalogConfig;
use crate::catalog::errors::CatalogError;
use crate::catalog::types::{Episode, Page, SavedShow};
use crate::utils::get_client;

use super::fetch::fetch_all;

/// Every show saved in the user's library, oldest page first.
pub(crate) async fn fetch_saved_shows(
    config: &CatalogConfig,
    access_token: &str,
) -> Result<Vec<SavedShow>, CatalogError> {
    fetch_all(
        move |offset, limit| async move {
            let url = listing_url(&config.api_url, &["me", "shows"], offset, limit)?;
            get_page(url, access_token).await
        },
        config.page_size,
        config.max_pages,
    )
    .await
}

/// Every episode of `show_id`, with the user's resume point.
pub(crate) async fn fetch_show_episodes(
    config: &CatalogConfig,
    access_token: &str,
    show_id: &str,
) -> Result<Vec<Episode>, CatalogError> {
    fetch_all(
        move |offset, limit| async move {
            let url = listing_url(
                &config.api_url,
                &["shows", show_id, "episodes"],
                offset,
                limit,
            )?;
            get_page(url, access_token).await
        },
        config.page_size,
        config.max_pages,
    )
    .await
}

fn listing_url(
    api_url: &str,
    segments: &[&str],
    offset: usize,
    limit: usize,
) -> Result<Url, CatalogError> {
    let mut url =
        Url::parse(api_url).map_err(|e| CatalogError::InvalidUrl(format!("{api_url}: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| CatalogError::InvalidUrl(format!("{api_url}: cannot be a base")))?
        .pop_if_empty()
        .extend(segments);
    url.query_pairs_mut()
        .append_pair("limit", &limit.to_string())
        .append_pair("offset", &offset.to_string());
    Ok(url)
}

async fn get_page<T: DeserializeOwned>(
    url: Url,
    access_token: &str,
) -> Result<Page<T>, CatalogError> {
    tracing::debug!("Fetching page: {}", url);

    let client = get_client()?;
    let response = client
        .get(url)
        .bearer_auth(access_token)
        .send()
        .await
        .map_err(|e| CatalogError::Request(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(CatalogError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| CatalogError::Request(e.to_string()))?;
    serde_json::from_str(&body).map_err(|e| CatalogError::Serde(e.to_string()))
}
