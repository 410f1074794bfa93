use thiserror::Error;
use crate::domain::SupplierId;

/// Errors that can occur while looking up or maintaining suppliers.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SupplierError {
    #[error("Supplier not found: {0}")]
    NotFound(SupplierId),
    #[error("Supplier lookup timed out: {0}")]
    Timeout(SupplierId),
    #[error("Supplier validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
