// Stickers module: barcode label batch generation

pub mod models;
pub mod services;

pub use models::{LabelDescriptor, LabelRequest};
pub use services::StickerService;
