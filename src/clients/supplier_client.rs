use async_trait::async_trait;
use tracing::{debug, instrument};
use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::domain::{Supplier, SupplierCreate, SupplierId, SupplierPatch};
use crate::product_store::SupplierDirectory;
use crate::supplier_actor::SupplierError;

/// Client for interacting with the Supplier actor.
#[derive(Clone)]
pub struct SupplierClient {
    inner: ResourceClient<Supplier>,
}

impl_basic_client!(SupplierClient, Supplier, SupplierId, SupplierError, supplier);

impl SupplierClient {
    #[instrument(skip(self))]
    pub async fn register_supplier(&self, name: String) -> Result<SupplierId, SupplierError> {
        debug!("Sending request");
        self.inner
            .create(SupplierCreate { name })
            .await
            .map_err(|e| match e {
                FrameworkError::Rejected(reason) => SupplierError::ValidationError(reason),
                other => SupplierError::ActorCommunicationError(other.to_string()),
            })
    }

    #[instrument(skip(self))]
    pub async fn rename_supplier(
        &self,
        id: SupplierId,
        name: String,
    ) -> Result<Supplier, SupplierError> {
        debug!("Sending request");
        self.inner
            .update(id, SupplierPatch { name: Some(name) })
            .await
            .map_err(|e| Self::map_keyed_error(id, e))
    }

    #[instrument(skip(self))]
    pub async fn remove_supplier(&self, id: SupplierId) -> Result<(), SupplierError> {
        debug!("Sending request");
        self.inner.delete(id).await.map_err(|e| Self::map_keyed_error(id, e))
    }

    fn map_keyed_error(id: SupplierId, e: FrameworkError) -> SupplierError {
        match e {
            FrameworkError::NotFound(_) => SupplierError::NotFound(id),
            FrameworkError::Rejected(reason) => SupplierError::ValidationError(reason),
            other => SupplierError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[async_trait]
impl SupplierDirectory for SupplierClient {
    async fn supplier_by_id(&self, id: SupplierId) -> Result<Supplier, SupplierError> {
        self.get_supplier(id).await?.ok_or(SupplierError::NotFound(id))
    }
}
