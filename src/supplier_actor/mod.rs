//! Supplier directory entity and its error type.

pub mod entity;
pub mod error;

pub use error::*;
