use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use catalog::Catalog;
use client_core::{ProductDetailController, ProductListController, ProductSource};
use shared::domain::ProductId;

mod config;

#[derive(Parser, Debug)]
struct Args {
    /// Search query to apply once the catalog has loaded.
    #[arg(long)]
    query: Option<String>,
    /// Product id to open in the detail view.
    #[arg(long)]
    product_id: Option<i64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();
    let settings = config::load_settings();

    let catalog = match &settings.catalog_path {
        Some(path) => Catalog::from_json_file(path)?,
        None => Catalog::seeded(),
    };
    tracing::info!(count = catalog.len(), "catalog: fixture ready");

    let source: Arc<dyn ProductSource> = Arc::new(catalog);
    let list = ProductListController::with_debounce(
        Arc::clone(&source),
        Duration::from_millis(settings.search_debounce_ms),
    );
    let mut list_states = list.subscribe();

    let loaded = list_states
        .wait_for(|state| !state.is_loading)
        .await?
        .clone();
    if let Some(error) = &loaded.error {
        tracing::warn!(error = %error, "list: catalog load failed");
    }
    println!("{}", serde_json::to_string(&loaded)?);

    if let Some(query) = args.query {
        list.set_query(query);
        let settled = list_states
            .wait_for(|state| !state.is_loading)
            .await?
            .clone();
        println!("{}", serde_json::to_string(&settled)?);
    }

    if let Some(raw_id) = args.product_id {
        let detail = ProductDetailController::new(Arc::clone(&source));
        detail.load_product(ProductId(raw_id)).await;
        println!("{}", serde_json::to_string(&detail.state())?);
    }

    Ok(())
}
