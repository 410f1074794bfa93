//! Typed client handles over the resource actors.

#[macro_use]
mod macros;
pub mod supplier_client;

pub use supplier_client::SupplierClient;
