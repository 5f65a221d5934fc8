// StickerService: batch generation of printable barcode labels.
//
// Best-effort batch semantics: a request whose barcode value cannot be
// encoded is logged and skipped, the rest of the batch still prints.

use tracing::warn;

use crate::config::Config;
use crate::core::money;
use crate::modules::stickers::models::{LabelDescriptor, LabelRequest};

/// Generates printable label descriptors for bulk sticker requests
pub struct StickerService {
    shop_name: String,
    name_width: usize,
}

impl StickerService {
    pub fn new(shop_name: impl Into<String>, name_width: usize) -> Self {
        Self {
            shop_name: shop_name.into(),
            name_width,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.shop.name.clone(), config.stickers.label_name_width)
    }

    /// Emit `copies` identical descriptors per request, in request order,
    /// repetitions contiguous per product. Total output equals the sum of
    /// copies over the requests that pass barcode validation.
    pub fn generate_batch(&self, requests: &[LabelRequest]) -> Vec<LabelDescriptor> {
        let mut labels = Vec::new();

        for request in requests {
            if let Err(reason) = validate_barcode(&request.barcode) {
                warn!(
                    product = %request.product_id,
                    barcode = %request.barcode,
                    %reason,
                    "sticker request skipped"
                );
                continue;
            }

            let product_name = truncate_name(&request.name, self.name_width);
            let price = money::format_price(request.price);

            for _ in 0..request.copies {
                labels.push(LabelDescriptor {
                    barcode: request.barcode.clone(),
                    shop_name: self.shop_name.clone(),
                    product_name: product_name.clone(),
                    price: price.clone(),
                });
            }
        }

        labels
    }
}

/// Code 128 encodes the printable ASCII range; anything outside it would
/// fail at the symbol renderer, so it is rejected here instead.
fn validate_barcode(value: &str) -> std::result::Result<(), String> {
    if value.is_empty() {
        return Err("empty barcode value".to_string());
    }

    if !value.chars().all(|c| c.is_ascii_graphic() || c == ' ') {
        return Err("barcode value outside the Code 128 character set".to_string());
    }

    Ok(())
}

/// Truncate to the sticker's printable width, ellipsized.
fn truncate_name(name: &str, width: usize) -> String {
    if name.chars().count() <= width {
        return name.to_string();
    }

    let cut: String = name.chars().take(width.saturating_sub(1)).collect();
    format!("{cut}…")
}
