//! WeavePOS Back-Office Core Library
//!
//! This library provides the UI-independent core of a point-of-sale and
//! back-office system for a textile retail shop: the billing ledger, the
//! invoice sequence, the product and supplier catalog, barcode sticker
//! batches, and reporting. Screens, printing, and remote backends consume
//! the plain structured data exposed here.

pub mod config;
pub mod core;
pub mod modules;
pub mod storage;

// Re-export commonly used types
pub use modules::billing;
pub use modules::catalog;
pub use modules::reports;
pub use modules::sequence;
pub use modules::stickers;
