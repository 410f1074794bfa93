use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use crate::domain::{Supplier, SupplierId};
use crate::supplier_actor::SupplierError;

/// Lookup the product store consults to resolve supplier display names.
///
/// Every `Err` is treated the same way by the store, so implementations are
/// free to report whatever went wrong.
#[async_trait]
pub trait SupplierDirectory: Send + Sync {
    async fn supplier_by_id(&self, id: SupplierId) -> Result<Supplier, SupplierError>;
}

#[async_trait]
impl<D> SupplierDirectory for Arc<D>
where
    D: SupplierDirectory + ?Sized,
{
    async fn supplier_by_id(&self, id: SupplierId) -> Result<Supplier, SupplierError> {
        (**self).supplier_by_id(id).await
    }
}

/// Bounds every lookup of the wrapped directory by a fixed deadline.
pub struct TimeoutDirectory<D> {
    inner: D,
    timeout: Duration,
}

impl<D> TimeoutDirectory<D> {
    pub fn new(inner: D, timeout: Duration) -> Self {
        Self { inner, timeout }
    }
}

#[async_trait]
impl<D: SupplierDirectory> SupplierDirectory for TimeoutDirectory<D> {
    async fn supplier_by_id(&self, id: SupplierId) -> Result<Supplier, SupplierError> {
        tokio::time::timeout(self.timeout, self.inner.supplier_by_id(id))
            .await
            .map_err(|_| SupplierError::Timeout(id))?
    }
}
