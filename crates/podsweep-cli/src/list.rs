//! `podsweep list` — enumerate a shop's catalog without mutating anything.

use podsweep_core::AppConfig;
use podsweep_engine::{BatchExecutor, CancelToken};

use crate::shop;

pub(crate) async fn run(config: &AppConfig, shop_id: &str, json: bool) -> anyhow::Result<()> {
    let client = shop::build_client(config)?;
    let cancel = CancelToken::new();

    let products = shop::fetch_all_products(config, &client, shop_id, &cancel).await?;
    let manifest = BatchExecutor::new(config.inter_item_delay_ms).preview(&products);

    if json {
        println!("{}", serde_json::to_string_pretty(&manifest)?);
    } else {
        println!("{} products in shop {shop_id}", manifest.total);
        for item in &manifest.items {
            println!("  {}  {}", item.id, item.label);
        }
    }

    Ok(())
}
