//! HTTP client for the print-on-demand shop API.

use std::time::Duration;

use reqwest::Client;

use crate::error::ClientError;
use crate::retry::retry_with_backoff;
use crate::types::ProductsPage;

const DEFAULT_BASE_URL: &str = "https://api.printify.com/v1";

/// Longest response-body prefix carried in an `UnexpectedStatus` error.
/// Bodies can be large HTML error pages; the batch report only needs enough
/// to diagnose the failure.
const ERROR_BODY_MAX_CHARS: usize = 256;

/// Client for the shop catalog and product endpoints.
///
/// Handles rate limiting (429), not-found (404), and other non-2xx responses
/// as typed errors. Transient errors (429, network failures, 5xx) are
/// automatically retried with exponential backoff up to `max_retries`
/// additional attempts.
///
/// Use [`ShopClient::new`] for production or [`ShopClient::with_base_url`] to
/// point at a mock server in tests.
pub struct ShopClient {
    client: Client,
    token: String,
    base_url: String,
    /// Maximum number of retry attempts after the first failure.
    max_retries: u32,
    /// Base delay in seconds for exponential backoff: `backoff_base_secs * 2^attempt`.
    backoff_base_secs: u64,
}

impl ShopClient {
    /// Creates a `ShopClient` against the production API with configured
    /// timeout and retry policy.
    ///
    /// Each individual request is bounded by `timeout_secs` so an
    /// unresponsive remote stalls one item, not the whole batch.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(
        api_token: &str,
        timeout_secs: u64,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, ClientError> {
        Self::with_base_url(
            api_token,
            timeout_secs,
            max_retries,
            backoff_base_secs,
            DEFAULT_BASE_URL,
        )
    }

    /// Creates a client with a custom base URL (for testing with wiremock or
    /// pointing at a staging deployment).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidUrl`] if `base_url`
    /// does not parse.
    pub fn with_base_url(
        api_token: &str,
        timeout_secs: u64,
        max_retries: u32,
        backoff_base_secs: u64,
        base_url: &str,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("podsweep/0.1 (storefront-cleanup)")
            .build()?;

        let trimmed = base_url.trim_end_matches('/');
        reqwest::Url::parse(trimmed).map_err(|e| ClientError::InvalidUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            token: api_token.to_owned(),
            base_url: trimmed.to_owned(),
            max_retries,
            backoff_base_secs,
        })
    }

    /// Fetches one page of the shop's product catalog, with automatic retry
    /// on transient errors.
    ///
    /// `page` is 1-based; `limit` is the page size.
    ///
    /// # Errors
    ///
    /// - [`ClientError::RateLimited`] — HTTP 429 after all retries exhausted.
    /// - [`ClientError::NotFound`] — HTTP 404 (not retried).
    /// - [`ClientError::UnexpectedStatus`] — any other non-2xx status
    ///   (5xx retried, 4xx not).
    /// - [`ClientError::Http`] — network failure after all retries exhausted.
    /// - [`ClientError::Deserialize`] — response body is not the expected
    ///   shape (not retried).
    pub async fn fetch_products_page(
        &self,
        shop_id: &str,
        page: u32,
        limit: u32,
    ) -> Result<ProductsPage, ClientError> {
        let url = self.products_url(shop_id, page, limit)?;

        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.clone();
            async move {
                let response = self
                    .client
                    .get(&url)
                    .bearer_auth(&self.token)
                    .header(reqwest::header::ACCEPT, "application/json")
                    .send()
                    .await?;

                let status = response.status();
                if let Some(err) = Self::status_error(status, &url, response.headers()) {
                    // Body is only read for UnexpectedStatus diagnostics.
                    if let ClientError::UnexpectedStatus { status, url, .. } = err {
                        let body = truncate_body(response.text().await.unwrap_or_default());
                        return Err(ClientError::UnexpectedStatus { status, url, body });
                    }
                    return Err(err);
                }

                let body = response.text().await?;
                serde_json::from_str::<ProductsPage>(&body).map_err(|e| {
                    ClientError::Deserialize {
                        context: format!("products page {page} for shop {shop_id}"),
                        source: e,
                    }
                })
            }
        })
        .await
    }

    /// Deletes one product from the shop, with automatic retry on transient
    /// errors.
    ///
    /// The operation is remote-idempotent only in the sense the API defines:
    /// deleting an already-deleted product returns 404, which surfaces as
    /// [`ClientError::NotFound`] rather than a silent success.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::fetch_products_page`]; the response body of a
    /// failed delete is preserved (truncated) in
    /// [`ClientError::UnexpectedStatus`].
    pub async fn delete_product(
        &self,
        shop_id: &str,
        product_id: &str,
    ) -> Result<(), ClientError> {
        let url = self.product_url(shop_id, product_id)?;

        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.clone();
            async move {
                let response = self
                    .client
                    .delete(&url)
                    .bearer_auth(&self.token)
                    .send()
                    .await?;

                let status = response.status();
                if let Some(err) = Self::status_error(status, &url, response.headers()) {
                    if let ClientError::UnexpectedStatus { status, url, .. } = err {
                        let body = truncate_body(response.text().await.unwrap_or_default());
                        return Err(ClientError::UnexpectedStatus { status, url, body });
                    }
                    return Err(err);
                }

                Ok(())
            }
        })
        .await
    }

    /// Maps a non-2xx status to its typed error; `None` for success statuses.
    /// `UnexpectedStatus` is returned with an empty body for the caller to
    /// fill in, since reading the body consumes the response.
    fn status_error(
        status: reqwest::StatusCode,
        url: &str,
        headers: &reqwest::header::HeaderMap,
    ) -> Option<ClientError> {
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = headers
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(60);
            return Some(ClientError::RateLimited {
                url: url.to_owned(),
                retry_after_secs,
            });
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Some(ClientError::NotFound {
                url: url.to_owned(),
            });
        }

        if !status.is_success() {
            return Some(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
                body: String::new(),
            });
        }

        None
    }

    /// Builds the paginated catalog URL for a shop.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the composed URL does not parse
    /// (e.g., a shop id containing path separators).
    fn products_url(&self, shop_id: &str, page: u32, limit: u32) -> Result<String, ClientError> {
        let raw = format!("{}/shops/{shop_id}/products.json", self.base_url);
        let mut url = reqwest::Url::parse(&raw).map_err(|e| ClientError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        url.query_pairs_mut().append_pair("page", &page.to_string());
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());

        Ok(url.to_string())
    }

    /// Builds the single-product URL used by the delete operation.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the composed URL does not parse.
    fn product_url(&self, shop_id: &str, product_id: &str) -> Result<String, ClientError> {
        let raw = format!(
            "{}/shops/{shop_id}/products/{product_id}.json",
            self.base_url
        );
        reqwest::Url::parse(&raw)
            .map(|url| url.to_string())
            .map_err(|e| ClientError::InvalidUrl {
                url: raw.clone(),
                reason: e.to_string(),
            })
    }
}

/// Keeps at most [`ERROR_BODY_MAX_CHARS`] characters of an error body.
fn truncate_body(body: String) -> String {
    if body.chars().count() <= ERROR_BODY_MAX_CHARS {
        body
    } else {
        body.chars().take(ERROR_BODY_MAX_CHARS).collect()
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
