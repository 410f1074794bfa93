use thiserror::Error;
use crate::domain::ProductId;

/// Errors surfaced by product store operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(ProductId),
}
