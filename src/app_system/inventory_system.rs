use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tracing::{error, info};
use crate::actor_framework::ResourceActor;
use crate::clients::SupplierClient;
use crate::domain::{Product, Supplier};
use crate::product_store::{ProductStore, SupplierDirectory, TimeoutDirectory};
use super::{SystemConfig, SystemError};

/// Product store backed by whatever directory the system was configured with.
pub type CatalogStore = ProductStore<Arc<dyn SupplierDirectory>>;

/// The main application system that wires the supplier directory actor to
/// the product store.
///
/// Responsible for starting up actors, seeding sample data, and handling shutdown.
pub struct InventorySystem {
    pub product_store: Arc<CatalogStore>,
    pub supplier_client: SupplierClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl InventorySystem {
    /// Starts the system. Must be called from within a tokio runtime.
    pub fn new(config: &SystemConfig) -> Self {
        let (suppliers, products) = if config.seed_sample_data {
            (sample_suppliers(), sample_products())
        } else {
            (Vec::new(), Vec::new())
        };

        // 1. Setup Supplier Directory
        let first_free_id = suppliers.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        let supplier_id_counter = Arc::new(AtomicI64::new(first_free_id));
        let next_supplier_id = move || supplier_id_counter.fetch_add(1, Ordering::SeqCst);

        let (supplier_actor, supplier_resource_client) =
            ResourceActor::<Supplier>::new(config.supplier_buffer_size, next_supplier_id);
        let supplier_client = SupplierClient::new(supplier_resource_client);
        let supplier_handle = tokio::spawn(supplier_actor.with_items(suppliers).run());

        // 2. Setup Product Store
        let directory: Arc<dyn SupplierDirectory> = match config.directory_timeout {
            Some(timeout) => Arc::new(TimeoutDirectory::new(supplier_client.clone(), timeout)),
            None => Arc::new(supplier_client.clone()),
        };
        let product_store = Arc::new(ProductStore::with_products(
            directory,
            config.shard_count,
            products,
        ));

        info!(
            products = product_store.len(),
            shards = config.shard_count,
            "Inventory system started"
        );

        Self {
            product_store,
            supplier_client,
            handles: vec![supplier_handle],
        }
    }

    /// Stops the directory actor and waits for it to finish.
    ///
    /// The actor only stops once every handle to it is gone, including any
    /// clones of `product_store` still held elsewhere.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        drop(self.product_store);
        drop(self.supplier_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(SystemError::TaskFailed(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

/// Suppliers loaded at startup. Supplier 2 is left out so product B shows
/// the fallback name.
pub fn sample_suppliers() -> Vec<Supplier> {
    vec![Supplier::new(1, "Acme"), Supplier::new(3, "Globex")]
}

pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new(1, "Product A", true, Some(1)),
        Product::new(2, "Product B", false, Some(2)),
        Product::new(3, "Product C", true, Some(3)),
    ]
}
