pub mod product_repository;
pub mod supplier_repository;

pub use product_repository::ProductRepository;
pub use supplier_repository::SupplierRepository;
