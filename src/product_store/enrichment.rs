use tracing::{debug, warn};
use crate::domain::Product;
use crate::supplier_actor::SupplierError;
use super::SupplierDirectory;

/// Display name used when the directory cannot resolve a supplier.
pub const UNKNOWN_SUPPLIER: &str = "Unknown Supplier";

/// Attaches the supplier display name to `product`.
///
/// Products without a supplier id come back untouched. Otherwise the name is
/// whatever the directory reports, or [`UNKNOWN_SUPPLIER`] when the lookup
/// fails for any reason. This never fails.
pub async fn enrich<D>(directory: &D, mut product: Product) -> Product
where
    D: SupplierDirectory + ?Sized,
{
    let Some(supplier_id) = product.supplier_id else {
        return product;
    };

    match directory.supplier_by_id(supplier_id).await {
        Ok(supplier) => {
            product.supplier_name = Some(supplier.name);
        }
        Err(SupplierError::NotFound(_)) => {
            debug!(product_id = product.id, supplier_id, "Supplier not in directory");
            product.supplier_name = Some(UNKNOWN_SUPPLIER.to_string());
        }
        Err(e) => {
            warn!(product_id = product.id, supplier_id, error = %e, "Supplier lookup failed");
            product.supplier_name = Some(UNKNOWN_SUPPLIER.to_string());
        }
    }
    product
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product_store::testing::StubDirectory;
    use proptest::prelude::*;

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
            .block_on(future)
    }

    #[tokio::test]
    async fn test_resolved_supplier_sets_name() {
        let directory = StubDirectory::with(&[(1, "Acme")]);

        let product = enrich(&directory, Product::new(1, "Product A", true, Some(1))).await;
        assert_eq!(product.supplier_name.as_deref(), Some("Acme"));
    }

    #[tokio::test]
    async fn test_broken_directory_falls_back() {
        let directory = StubDirectory::broken();

        let product = enrich(&directory, Product::new(1, "Product A", true, Some(1))).await;
        assert_eq!(product.supplier_name.as_deref(), Some(UNKNOWN_SUPPLIER));
    }

    #[tokio::test]
    async fn test_no_supplier_skips_lookup() {
        let directory = StubDirectory::broken();
        let mut product = Product::new(5, "Loose", true, None);
        product.supplier_name = Some("stale".to_string());

        let enriched = enrich(&directory, product.clone()).await;
        assert_eq!(enriched, product);
        assert_eq!(directory.lookups(), 0);
    }

    proptest! {
        #[test]
        fn prop_enrichment_follows_directory(
            known in proptest::collection::hash_map(0i64..8, "[A-Za-z]{1,12}", 0..8),
            supplier_id in proptest::option::of(0i64..8),
            prior in proptest::option::of("[a-z]{0,6}"),
        ) {
            let entries: Vec<(i64, &str)> = known.iter().map(|(id, name)| (*id, name.as_str())).collect();
            let directory = StubDirectory::with(&entries);
            let mut product = Product::new(1, "p", true, supplier_id);
            product.supplier_name = prior.clone();

            let enriched = block_on(enrich(&directory, product));

            let expected = match supplier_id {
                None => prior,
                Some(id) => Some(known.get(&id).cloned().unwrap_or_else(|| UNKNOWN_SUPPLIER.to_string())),
            };
            prop_assert_eq!(enriched.supplier_name, expected);
        }
    }
}
