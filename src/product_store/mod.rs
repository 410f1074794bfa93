//! The product store: sharded in-memory catalog plus supplier enrichment.

mod directory;
mod enrichment;
mod error;
mod shards;
mod store;

pub use directory::{SupplierDirectory, TimeoutDirectory};
pub use enrichment::{enrich, UNKNOWN_SUPPLIER};
pub use error::ProductError;
pub use shards::ShardedMap;
pub use store::ProductStore;

#[cfg(test)]
pub(crate) mod testing;
