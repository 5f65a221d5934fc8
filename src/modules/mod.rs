pub mod billing;
pub mod catalog;
pub mod reports;
pub mod sequence;
pub mod stickers;
