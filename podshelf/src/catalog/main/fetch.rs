use std::future::Future;

use crate::catalog::errors::CatalogError;
use crate::catalog::types::Page;

/// Collects every item of a paged listing.
///
/// `fetch_page(offset, limit)` is called with offsets `0, page_size, 2 * page_size, ..`
/// until a page reports no `next` page. Items keep the order in which the
/// pages returned them. When `max_pages` requests still leave a further page,
/// [`CatalogError::PaginationLimitExceeded`] is returned instead of the partial list.
pub async fn fetch_all<T, F, Fut>(
    mut fetch_page: F,
    page_size: usize,
    max_pages: usize,
) -> Result<Vec<T>, CatalogError>
where
    F: FnMut(usize, usize) -> Fut,
    Fut: Future<Output = Result<Page<T>, CatalogError>>,
{
    let mut items = Vec::new();
    let mut offset = 0;

    for _ in 0..max_pages {
        let page = fetch_page(offset, page_size).await?;
        items.extend(page.items);
        if page.next.is_none() {
            tracing::debug!("Fetched {} items", items.len());
            return Ok(items);
        }
        offset += page_size;
    }

    Err(CatalogError::PaginationLimitExceeded { max_pages })
}
