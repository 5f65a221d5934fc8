// LineItem model with subtotal recomputation.
//
// One product row inside an in-progress transaction. The stored subtotal
// is never trusted on its own: it is recomputed from quantity, price,
// discount and GST after every mutation, so it can never drift from its
// inputs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money;
use crate::modules::catalog::Product;

/// Which side of the counter a transaction sits on.
///
/// Purchases price GST on top of the buy rate; sales and returns keep the
/// shelf price and only subtract the line discount. That asymmetry is
/// deliberate: the shop buys tax-exclusive and sells tax-inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Sale,
    Purchase,
    Return,
}

impl TransactionKind {
    pub fn adds_tax(self) -> bool {
        matches!(self, TransactionKind::Purchase)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Sale => "sale",
            TransactionKind::Purchase => "purchase",
            TransactionKind::Return => "return",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "sale" => Ok(TransactionKind::Sale),
            "purchase" => Ok(TransactionKind::Purchase),
            "return" => Ok(TransactionKind::Return),
            _ => Err(format!("Invalid transaction kind: {}", s)),
        }
    }
}

/// A single product line within a ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product this line refers to, unique within one ledger
    pub product_id: String,

    /// Denormalized display name, frozen at insertion time
    pub name: String,

    /// Price per unit at insertion time (buy rate on purchases)
    pub unit_price: Decimal,

    /// Units on this line; driving it to zero removes the line
    pub quantity: i64,

    /// Flat discount on the whole line, clamped into [0, quantity × price]
    pub line_discount: Decimal,

    /// GST percentage (0–100); only priced in on purchases
    pub tax_rate: Option<Decimal>,

    /// Derived value, recomputed from the fields above on every mutation
    pub subtotal: Decimal,
}

impl LineItem {
    /// Create a line for one unit of a catalog product.
    pub fn from_product(product: &Product, kind: TransactionKind) -> Self {
        let mut item = Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            quantity: 1,
            line_discount: Decimal::ZERO,
            tax_rate: None,
            subtotal: Decimal::ZERO,
        };
        item.recompute(kind);
        item
    }

    /// Line value before discount and tax: quantity × unit price.
    pub fn gross(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }

    /// Recompute the stored subtotal from the current fields.
    ///
    /// Sale/return: `qty × price − discount`.
    /// Purchase: `qty × price × (1 + gst/100) − discount`.
    pub fn recompute(&mut self, kind: TransactionKind) {
        let mut base = self.gross();
        if kind.adds_tax() {
            if let Some(rate) = self.tax_rate {
                base *= money::tax_factor(rate);
            }
        }
        self.subtotal = money::round_price(base - self.line_discount);
    }
}
