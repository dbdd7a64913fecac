use clap::{Parser, Subcommand};

mod list;
mod purge;
mod shop;

#[derive(Debug, Parser)]
#[command(name = "podsweep")]
#[command(about = "Storefront cleanup for print-on-demand shops")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List every product in a shop (full paginated fetch, no mutation).
    List {
        shop_id: String,
        /// Emit the manifest as JSON instead of per-line text.
        #[arg(long)]
        json: bool,
    },
    /// Delete every product in a shop, sequentially and rate-limited.
    Purge {
        shop_id: String,
        /// Report what would be deleted without touching anything.
        #[arg(long)]
        dry_run: bool,
        /// Required confirmation for a destructive run.
        #[arg(long)]
        yes: bool,
        /// Emit the final report as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = podsweep_core::load_app_config()?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.log_level))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::List { shop_id, json } => list::run(&config, &shop_id, json).await,
        Commands::Purge {
            shop_id,
            dry_run,
            yes,
            json,
        } => purge::run(&config, &shop_id, dry_run, yes, json).await,
    }
}
