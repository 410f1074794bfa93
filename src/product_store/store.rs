use tracing::{debug, info, instrument};
use crate::domain::{Product, ProductChanges, ProductId};
use super::{enrich, ProductError, ShardedMap, SupplierDirectory};

/// Concurrent in-memory catalog of products.
///
/// Every product handed out is a copy enriched with its supplier's display
/// name at hand-off time. Operations on the same id are serialized by that
/// id's shard lock; operations on other ids are not.
pub struct ProductStore<D> {
    products: ShardedMap<ProductId, Product>,
    directory: D,
}

impl<D: SupplierDirectory> ProductStore<D> {
    pub fn new(directory: D, shard_count: usize) -> Self {
        Self {
            products: ShardedMap::new(shard_count),
            directory,
        }
    }

    /// Builds a store preloaded with `products`. Duplicate ids keep the first
    /// occurrence, as `create` would.
    pub fn with_products(
        directory: D,
        shard_count: usize,
        products: impl IntoIterator<Item = Product>,
    ) -> Self {
        let store = Self::new(directory, shard_count);
        for product in products {
            store.products.insert_if_absent(product.id, product);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Vec<Product> {
        debug!("Listing all products");
        self.enrich_all(self.products.values()).await
    }

    #[instrument(skip(self))]
    pub async fn list_available(&self) -> Vec<Product> {
        debug!("Listing available products");
        let available = self.products.values().into_iter().filter(|p| p.available).collect();
        self.enrich_all(available).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: ProductId) -> Option<Product> {
        let Some(product) = self.products.get(&id) else {
            debug!("Product not found");
            return None;
        };
        Some(enrich(&self.directory, product).await)
    }

    /// Inserts `product` unless its id is taken, in which case the stored
    /// product is left as it was.
    ///
    /// Either way the enriched *input* is returned, so on a collision the
    /// result differs from what a later `get` reports.
    #[instrument(skip(self, product), fields(product_id = product.id))]
    pub async fn create(&self, product: Product) -> Product {
        if self.products.insert_if_absent(product.id, product.clone()) {
            info!(product_name = %product.name, "Product created");
        } else {
            debug!("Product id already taken, keeping existing product");
        }
        enrich(&self.directory, product).await
    }

    /// Replaces `name`, `available` and `supplier_id` of an existing product.
    ///
    /// # Errors
    /// [`ProductError::NotFound`] when no product has this id. The store is
    /// left unchanged in that case.
    #[instrument(skip(self, changes))]
    pub async fn update(
        &self,
        id: ProductId,
        changes: ProductChanges,
    ) -> Result<Product, ProductError> {
        let updated = self
            .products
            .update(&id, |product| {
                product.apply(changes);
                product.clone()
            })
            .ok_or(ProductError::NotFound(id))?;
        info!(product_name = %updated.name, available = updated.available, "Product updated");
        Ok(enrich(&self.directory, updated).await)
    }

    /// Removes the product with this id, if any.
    #[instrument(skip(self))]
    pub fn delete(&self, id: ProductId) {
        match self.products.remove(&id) {
            Some(_) => info!("Product deleted"),
            None => debug!("Nothing to delete"),
        }
    }

    async fn enrich_all(&self, products: Vec<Product>) -> Vec<Product> {
        let mut enriched = Vec::with_capacity(products.len());
        for product in products {
            enriched.push(enrich(&self.directory, product).await);
        }
        enriched
    }
}
