//! Directory doubles shared by the store tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use async_trait::async_trait;
use crate::domain::{Supplier, SupplierId};
use crate::supplier_actor::SupplierError;
use super::SupplierDirectory;

/// Answers from a fixed table, or fails every lookup when broken.
pub struct StubDirectory {
    names: HashMap<SupplierId, String>,
    broken: bool,
    lookups: AtomicUsize,
}

impl StubDirectory {
    pub fn with(entries: &[(SupplierId, &str)]) -> Self {
        Self {
            names: entries.iter().map(|(id, name)| (*id, name.to_string())).collect(),
            broken: false,
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn broken() -> Self {
        Self {
            names: HashMap::new(),
            broken: true,
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SupplierDirectory for StubDirectory {
    async fn supplier_by_id(&self, id: SupplierId) -> Result<Supplier, SupplierError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.broken {
            return Err(SupplierError::ActorCommunicationError("directory offline".to_string()));
        }
        self.names
            .get(&id)
            .map(|name| Supplier::new(id, name.clone()))
            .ok_or(SupplierError::NotFound(id))
    }
}

/// Never answers within any reasonable deadline.
pub struct SlowDirectory(pub Duration);

#[async_trait]
impl SupplierDirectory for SlowDirectory {
    async fn supplier_by_id(&self, id: SupplierId) -> Result<Supplier, SupplierError> {
        tokio::time::sleep(self.0).await;
        Ok(Supplier::new(id, "too late"))
    }
}
