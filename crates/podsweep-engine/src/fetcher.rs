//! Multi-page collection fetch loop.
//!
//! Walks a remote paginated collection from page 1 until the server reports
//! no further pages, concatenating items in page order. The page client is
//! injected as a closure so the loop can be driven against fakes in tests and
//! reused against any `{data, current_page, last_page}`-shaped endpoint.

use std::future::Future;
use std::time::Duration;

use crate::cancel::CancelToken;
use crate::error::FetchError;
use crate::types::Page;

/// What to do when a page request fails mid-pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPolicy {
    /// Any page failure fails the whole fetch; no partial collection escapes.
    Strict,
    /// A page failure returns the accumulated prefix with a logged warning.
    /// An explicit opt-in for callers that prefer a partial listing over none.
    Lenient,
}

/// Tuning for [`fetch_collection`].
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Sleep between consecutive page requests (none before the first page).
    pub inter_page_delay_ms: u64,
    /// Hard ceiling on pages requested in one fetch.
    pub max_pages: usize,
    pub policy: FetchPolicy,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            inter_page_delay_ms: 1000,
            max_pages: 1000,
            policy: FetchPolicy::Strict,
        }
    }
}

/// Fetches the full collection by requesting pages until exhausted.
///
/// `fetch_page` receives a 1-based page number and returns that page; the
/// collection id and page size are expected to be bound into the closure.
/// Pagination stops when a page reports `current_page >= last_page`. A page
/// reporting `current_page > last_page` is treated as a malformed payload.
///
/// The cancellation token is checked before each page request.
///
/// # Errors
///
/// - [`FetchError::PageFetch`] — a page request failed or returned malformed
///   pagination metadata (strict policy only; lenient returns the prefix).
/// - [`FetchError::PaginationLimit`] — more than `max_pages` pages were
///   requested without the remote converging.
/// - [`FetchError::Cancelled`] — the token fired between pages.
pub async fn fetch_collection<T, E, F, Fut>(
    collection_id: &str,
    config: &FetchConfig,
    cancel: &CancelToken,
    mut fetch_page: F,
) -> Result<Vec<T>, FetchError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Page<T>, E>>,
    E: std::fmt::Display,
{
    let mut items: Vec<T> = Vec::new();
    let mut next_page = 1u32;
    let mut pages_fetched = 0u32;

    loop {
        if cancel.is_cancelled() {
            return Err(FetchError::Cancelled {
                collection_id: collection_id.to_owned(),
                pages_fetched,
            });
        }

        if pages_fetched as usize >= config.max_pages {
            return Err(FetchError::PaginationLimit {
                collection_id: collection_id.to_owned(),
                max_pages: config.max_pages,
            });
        }

        if pages_fetched > 0 && config.inter_page_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(config.inter_page_delay_ms)).await;
        }

        let page = match fetch_page(next_page).await {
            Ok(page) => page,
            Err(e) => {
                return handle_page_failure(
                    config.policy,
                    collection_id,
                    next_page,
                    e.to_string(),
                    items,
                );
            }
        };

        if page.current_page > page.last_page {
            let message = format!(
                "malformed pagination metadata: current_page {} > last_page {}",
                page.current_page, page.last_page
            );
            return handle_page_failure(config.policy, collection_id, next_page, message, items);
        }

        pages_fetched += 1;
        tracing::info!(
            collection = collection_id,
            page = page.current_page,
            last_page = page.last_page,
            items = page.items.len(),
            "fetched collection page"
        );
        items.extend(page.items);

        if page.current_page >= page.last_page {
            break;
        }
        next_page = page.current_page + 1;
    }

    Ok(items)
}

/// Applies the configured policy to a failed or malformed page: strict fails
/// the whole fetch, lenient surfaces the prefix accumulated so far.
fn handle_page_failure<T>(
    policy: FetchPolicy,
    collection_id: &str,
    page: u32,
    message: String,
    partial: Vec<T>,
) -> Result<Vec<T>, FetchError> {
    match policy {
        FetchPolicy::Strict => Err(FetchError::PageFetch {
            collection_id: collection_id.to_owned(),
            page,
            message,
        }),
        FetchPolicy::Lenient => {
            tracing::warn!(
                collection = collection_id,
                page,
                error = %message,
                items_kept = partial.len(),
                "page fetch failed; returning partial collection"
            );
            Ok(partial)
        }
    }
}

#[cfg(test)]
#[path = "fetcher_test.rs"]
mod tests;
