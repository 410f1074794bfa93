pub mod product;
pub mod supplier;

pub use product::*;
pub use supplier::*;
