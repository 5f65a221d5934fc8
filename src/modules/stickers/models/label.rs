use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};
use crate::modules::catalog::Product;

/// One entry in a bulk sticker print request: which product, and how many
/// physical stickers to print for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelRequest {
    pub product_id: String,
    /// Number of identical stickers to emit
    pub copies: u32,
    /// Value encoded into the barcode symbol
    pub barcode: String,
    pub name: String,
    pub price: Decimal,
}

impl LabelRequest {
    /// Build a request from a catalog product. Products without a barcode
    /// cannot be stickered.
    pub fn from_product(product: &Product, copies: u32) -> Result<Self> {
        let barcode = product.barcode.clone().ok_or_else(|| {
            AppError::validation(format!("Product '{}' has no barcode", product.name))
        })?;

        Ok(Self {
            product_id: product.id.clone(),
            copies,
            barcode,
            name: product.name.clone(),
            price: product.price,
        })
    }
}

/// One printable sticker, ready for the external print-layout renderer.
/// All fields are display-ready strings except the barcode value, which
/// the renderer turns into a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelDescriptor {
    pub barcode: String,
    pub shop_name: String,
    /// Product name truncated to the configured sticker width
    pub product_name: String,
    /// Price formatted to two decimal places
    pub price: String,
}
