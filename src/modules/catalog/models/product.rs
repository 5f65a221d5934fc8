// Product master data record.
//
// The ledger only ever reads products (id, name, shelf price, stock on
// hand); stock movements are applied by the billing service after a
// transaction is finalized.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{AppError, Result};

/// A product in the shop catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (UUID)
    pub id: String,

    /// Display name, unique in practice but not enforced
    pub name: String,

    /// Shelf price per unit
    pub price: Decimal,

    /// Quantity on hand
    pub stock: i64,

    /// Barcode value printed on stickers (Code 128 subset)
    pub barcode: Option<String>,

    /// Supplier this product is usually bought from
    pub supplier_id: Option<String>,
}

impl Product {
    /// Create a new product with validation
    pub fn new(name: impl Into<String>, price: Decimal) -> Result<Self> {
        let name = name.into();
        Self::validate_name(&name)?;
        Self::validate_price(price)?;

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name,
            price,
            stock: 0,
            barcode: None,
            supplier_id: None,
        })
    }

    pub fn with_stock(mut self, stock: i64) -> Self {
        self.stock = stock;
        self
    }

    pub fn with_barcode(mut self, barcode: impl Into<String>) -> Self {
        self.barcode = Some(barcode.into());
        self
    }

    pub fn with_supplier(mut self, supplier_id: impl Into<String>) -> Self {
        self.supplier_id = Some(supplier_id.into());
        self
    }

    /// Re-validate after field edits, before persisting an update.
    pub fn validate(&self) -> Result<()> {
        Self::validate_name(&self.name)?;
        Self::validate_price(self.price)
    }

    fn validate_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(AppError::validation("Product name cannot be empty"));
        }

        Ok(())
    }

    fn validate_price(price: Decimal) -> Result<()> {
        if price < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Product price must be non-negative, got: {}",
                price
            )));
        }

        Ok(())
    }
}
