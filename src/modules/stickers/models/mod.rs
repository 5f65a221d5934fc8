pub mod label;

pub use label::{LabelDescriptor, LabelRequest};
