pub mod sticker_service;

pub use sticker_service::StickerService;
