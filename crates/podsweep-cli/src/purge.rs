//! `podsweep purge` — delete every product in a shop.
//!
//! A destructive run requires `--yes`; `--dry-run` prints the manifest the
//! executor would act on and performs no remote mutation. Ctrl-C is wired to
//! the engine's cancellation token, so an interrupted run finishes the item
//! in flight, skips the rest, and still prints a complete report of what was
//! touched.

use podsweep_core::AppConfig;
use podsweep_engine::{BatchExecutor, BatchReport, CancelToken, RunLocks};

use crate::shop;

pub(crate) async fn run(
    config: &AppConfig,
    shop_id: &str,
    dry_run: bool,
    yes: bool,
    json: bool,
) -> anyhow::Result<()> {
    if !dry_run && !yes {
        anyhow::bail!("refusing to delete without --yes; use --dry-run to preview the scope");
    }

    let client = shop::build_client(config)?;
    let cancel = CancelToken::new();

    let interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupt received; finishing the current item then stopping");
            interrupt.cancel();
        }
    });

    // Serialize runs per shop: two overlapping purges of the same shop would
    // race each other's deletes.
    let locks = RunLocks::new();
    let _run_guard = locks.acquire(shop_id).await;

    let products = shop::fetch_all_products(config, &client, shop_id, &cancel).await?;
    let executor = BatchExecutor::new(config.inter_item_delay_ms);

    if dry_run {
        let manifest = executor.preview(&products);
        if json {
            println!("{}", serde_json::to_string_pretty(&manifest)?);
        } else {
            println!(
                "dry run: {} products in shop {shop_id} would be deleted",
                manifest.total
            );
            for item in &manifest.items {
                println!("  {}  {}", item.id, item.label);
            }
        }
        return Ok(());
    }

    let client = &client;
    let report = executor
        .execute(products, &cancel, |product| async move {
            client.delete_product(shop_id, &product.id).await
        })
        .await;

    print_report(shop_id, &report, json)?;

    if report.cancelled {
        anyhow::bail!(
            "purge of shop {shop_id} cancelled after {} of {} items",
            report.succeeded.len() + report.failed.len(),
            report.total
        );
    }

    Ok(())
}

fn print_report(shop_id: &str, report: &BatchReport, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!(
        "shop {shop_id}: {} deleted, {} failed, {} total",
        report.succeeded.len(),
        report.failed.len(),
        report.total
    );
    if !report.failed.is_empty() {
        println!("failed items (retry these manually):");
        for failure in &report.failed {
            println!("  {}  {}: {}", failure.id, failure.label, failure.error);
        }
    }

    Ok(())
}
