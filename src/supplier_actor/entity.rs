use crate::actor_framework::Entity;
use crate::domain::{Supplier, SupplierCreate, SupplierId, SupplierPatch};

impl Entity for Supplier {
    type Id = SupplierId;
    type CreatePayload = SupplierCreate;
    type Patch = SupplierPatch;

    fn id(&self) -> &SupplierId {
        &self.id
    }

    /// Creates a new Supplier from creation parameters.
    ///
    /// # Errors
    /// Rejects blank names, since the name is what products display.
    fn from_create(id: SupplierId, params: SupplierCreate) -> Result<Self, String> {
        if params.name.trim().is_empty() {
            return Err("Supplier name must not be blank".to_string());
        }
        Ok(Self {
            id,
            name: params.name,
        })
    }

    /// Renames the supplier when a new name is given.
    fn on_update(&mut self, patch: SupplierPatch) -> Result<(), String> {
        if let Some(name) = patch.name {
            if name.trim().is_empty() {
                return Err("Supplier name must not be blank".to_string());
            }
            self.name = name;
        }
        Ok(())
    }
}
