mod domain;
mod clients;

mod app_system;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod supplier_actor;
mod product_store;

use std::error::Error;
use tracing::{info, warn, Instrument};
use crate::app_system::{setup_tracing, CatalogStore, InventorySystem, SystemConfig};
use crate::clients::SupplierClient;
use crate::domain::{Product, ProductChanges};
use crate::product_store::UNKNOWN_SUPPLIER;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = SystemConfig::from_env();
    info!(?config, "Starting product catalog");

    let system = InventorySystem::new(&config);
    let store = &system.product_store;
    if store.is_empty() {
        warn!("Catalog starts empty; set CATALOG_SEED=true to load sample data");
    }

    let span = tracing::info_span!("catalog_listing");
    async {
        for product in store.list_all().await {
            let json = serde_json::to_string(&product)?;
            info!(product = %json, "Catalog entry");
        }
        for product in store.list_available().await {
            info!(product_id = product.id, "In stock");
        }
        Ok::<_, serde_json::Error>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("catalog_changes");
    async {
        let created = store.create(Product::new(4, "Product D", true, Some(1))).await;
        let json = serde_json::to_string(&created)?;
        info!(product = %json, "Created");

        match store.update(2, ProductChanges::new("Product B", true, Some(3))).await {
            Ok(updated) => {
                let json = serde_json::to_string(&updated)?;
                info!(product = %json, "Updated");
            }
            Err(e) => warn!(error = %e, "Update failed"),
        }

        if let Err(e) = store.update(99, ProductChanges::new("Ghost", false, None)).await {
            info!(error = %e, "Update of unknown product rejected");
        }

        store.delete(4);
        Ok::<_, serde_json::Error>(())
    }
    .instrument(span)
    .await?;

    supplier_changes(store, &system.supplier_client)
        .instrument(tracing::info_span!("supplier_changes"))
        .await?;

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}

/// Changes the directory underneath the catalog and reads the affected
/// products back. Returns them in the order they were read.
async fn supplier_changes(
    store: &CatalogStore,
    suppliers: &SupplierClient,
) -> Result<Vec<Product>, Box<dyn Error>> {
    let mut seen = Vec::new();

    let id = suppliers.register_supplier("Initech".to_string()).await?;
    info!(supplier_id = id, "Supplier registered");
    if store.get(2).await.is_some() {
        let moved = store.update(2, ProductChanges::new("Product B", true, Some(id))).await?;
        info!(product_id = moved.id, supplier = ?moved.supplier_name, "Product moved");
        seen.push(moved);
    }

    suppliers.rename_supplier(1, "Acme Holdings".to_string()).await?;
    if let Some(product) = store.get(1).await {
        info!(product_id = product.id, supplier = ?product.supplier_name, "Read after rename");
        seen.push(product);
    }

    suppliers.remove_supplier(3).await?;
    if let Some(product) = store.get(3).await {
        if product.supplier_name.as_deref() == Some(UNKNOWN_SUPPLIER) {
            info!(product_id = product.id, "Supplier gone, fallback name shown");
        }
        seen.push(product);
    }

    Ok(seen)
}
