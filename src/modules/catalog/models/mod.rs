pub mod product;
pub mod supplier;

pub use product::Product;
pub use supplier::Supplier;
