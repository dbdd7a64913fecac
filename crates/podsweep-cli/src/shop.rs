//! Shared wiring between CLI commands: client construction and the full
//! paginated product fetch.

use anyhow::Context;
use podsweep_client::{ShopClient, ShopProduct};
use podsweep_core::AppConfig;
use podsweep_engine::{fetch_collection, CancelToken, FetchConfig, FetchPolicy, Page};

pub(crate) fn build_client(config: &AppConfig) -> anyhow::Result<ShopClient> {
    ShopClient::with_base_url(
        &config.api_token,
        config.request_timeout_secs,
        config.max_retries,
        config.retry_backoff_base_secs,
        &config.api_base_url,
    )
    .context("failed to construct API client")
}

pub(crate) fn fetch_config(config: &AppConfig) -> FetchConfig {
    FetchConfig {
        inter_page_delay_ms: config.inter_page_delay_ms,
        max_pages: config.max_pages,
        policy: if config.lenient_fetch {
            FetchPolicy::Lenient
        } else {
            FetchPolicy::Strict
        },
    }
}

/// Fetches the shop's complete product collection, page by page.
pub(crate) async fn fetch_all_products(
    config: &AppConfig,
    client: &ShopClient,
    shop_id: &str,
    cancel: &CancelToken,
) -> anyhow::Result<Vec<ShopProduct>> {
    let products = fetch_collection(shop_id, &fetch_config(config), cancel, |page| async move {
        let fetched = client
            .fetch_products_page(shop_id, page, config.page_size)
            .await?;
        Ok::<_, podsweep_client::ClientError>(Page {
            items: fetched.data,
            current_page: fetched.current_page,
            last_page: fetched.last_page,
        })
    })
    .await
    .with_context(|| format!("failed to fetch product collection for shop {shop_id}"))?;

    Ok(products)
}
