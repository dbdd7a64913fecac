use thiserror::Error;

/// Errors raised while fetching a paginated collection.
///
/// Per-item operation failures are *not* represented here: the executor
/// converts them to [`crate::ItemFailure`] outcomes and never propagates them.
#[derive(Debug, Error)]
pub enum FetchError {
    /// A page request failed or returned a malformed payload. Fatal to the
    /// fetch under [`crate::FetchPolicy::Strict`]; degraded to a warned
    /// partial collection under [`crate::FetchPolicy::Lenient`].
    #[error("page {page} fetch failed for collection {collection_id}: {message}")]
    PageFetch {
        collection_id: String,
        page: u32,
        message: String,
    },

    /// The remote kept reporting further pages past the configured ceiling.
    /// Guards against a misreported `last_page` turning into an infinite
    /// loop; fatal under both fetch policies.
    #[error("pagination limit reached for collection {collection_id}: exceeded {max_pages} pages")]
    PaginationLimit {
        collection_id: String,
        max_pages: usize,
    },

    /// The cancellation token fired between page requests.
    #[error("fetch cancelled for collection {collection_id} after {pages_fetched} pages")]
    Cancelled {
        collection_id: String,
        pages_fetched: u32,
    },
}
