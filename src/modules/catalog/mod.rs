// Catalog module: product and supplier master data

pub mod models;
pub mod repositories;

pub use models::{Product, Supplier};
pub use repositories::{ProductRepository, SupplierRepository};
