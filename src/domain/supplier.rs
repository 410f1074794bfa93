use serde::{Deserialize, Serialize};

pub type SupplierId = i64;

/// A supplier known to the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
}

/// Payload for registering a new supplier.
#[derive(Debug, Clone)]
pub struct SupplierCreate {
    pub name: String,
}

/// Payload for updating an existing supplier.
#[derive(Debug, Clone)]
pub struct SupplierPatch {
    pub name: Option<String>,
}

impl Supplier {
    pub fn new(id: SupplierId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
