// Ledger model: the working set of line items for one transaction.
//
// Aggregates are pure functions of the item list and are recomputed after
// every mutation; none of them is independently settable. All Decimal
// arithmetic, so recomputing twice with no intervening mutation yields
// bit-identical results.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{money, AppError, Result};
use crate::modules::catalog::Product;
use crate::modules::sequence::InvoiceId;

use super::finalized::FinalizedTransaction;
use super::line_item::{LineItem, TransactionKind};

/// Derived totals over the whole ledger
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerTotals {
    /// Σ quantity over all lines
    pub total_quantity: i64,
    /// Σ quantity × unit price, before discount and tax
    pub sub_total: Decimal,
    /// Σ line discounts
    pub total_discount: Decimal,
    /// Σ line subtotals — what the customer pays or the shop owes
    pub grand_total: Decimal,
}

/// Ledger lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerState {
    /// No line items, all aggregates zero
    Empty,
    /// At least one line item
    Active,
}

/// The in-progress transaction one screen is editing.
///
/// One ledger per screen; the same object is reused for the next
/// transaction after `reset` or `finalize`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    kind: TransactionKind,
    items: Vec<LineItem>,
    totals: LedgerTotals,
}

impl Ledger {
    /// Create an empty ledger for the given transaction kind.
    pub fn new(kind: TransactionKind) -> Self {
        Self {
            kind,
            items: Vec::new(),
            totals: LedgerTotals::default(),
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn totals(&self) -> LedgerTotals {
        self.totals
    }

    pub fn state(&self) -> LedgerState {
        if self.items.is_empty() {
            LedgerState::Empty
        } else {
            LedgerState::Active
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn find_mut(&mut self, product_id: &str) -> Result<&mut LineItem> {
        self.items
            .iter_mut()
            .find(|i| i.product_id == product_id)
            .ok_or_else(|| {
                AppError::not_found(format!("No line item for product '{}'", product_id))
            })
    }

    /// Add the product as a new line, or bump the quantity of the line
    /// that already holds it. The price is taken from the catalog record
    /// at insertion time and frozen.
    pub fn add_or_increment(&mut self, product: &Product) {
        match self.items.iter_mut().find(|i| i.product_id == product.id) {
            Some(item) => item.quantity += 1,
            None => self.items.push(LineItem::from_product(product, self.kind)),
        }
        self.recompute();
    }

    /// Set a line's quantity. Zero removes the line; negative input is
    /// treated exactly like zero, not as an error.
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) -> Result<()> {
        let pos = self
            .items
            .iter()
            .position(|i| i.product_id == product_id)
            .ok_or_else(|| {
                AppError::not_found(format!("No line item for product '{}'", product_id))
            })?;

        if quantity <= 0 {
            self.items.remove(pos);
        } else {
            let item = &mut self.items[pos];
            item.quantity = quantity;
            // Keep the documented discount ≤ gross constraint after the
            // edit; a cut quantity shrinks the gross the discount was
            // clamped against.
            let gross = item.gross();
            if item.line_discount > gross {
                item.line_discount = gross;
            }
        }
        self.recompute();
        Ok(())
    }

    /// Set a line's flat discount. Negative input coerces to zero and the
    /// discount never exceeds the line gross (fail-soft, no parse error
    /// ever reaches the aggregates).
    pub fn set_line_discount(&mut self, product_id: &str, amount: Decimal) -> Result<()> {
        let item = self.find_mut(product_id)?;
        let gross = item.gross();
        item.line_discount = amount.clamp(Decimal::ZERO, gross);
        self.recompute();
        Ok(())
    }

    /// Set a line's GST percentage. Out-of-range rates are rejected and
    /// leave the ledger unchanged.
    pub fn set_tax_rate(&mut self, product_id: &str, rate_percent: Decimal) -> Result<()> {
        if !money::is_valid_tax_rate(rate_percent) {
            return Err(AppError::validation(format!(
                "GST rate must be between 0 and 100, got: {}",
                rate_percent
            )));
        }

        let item = self.find_mut(product_id)?;
        item.tax_rate = Some(rate_percent);
        self.recompute();
        Ok(())
    }

    /// Overwrite a line's unit price (the buy rate on purchase entry).
    pub fn set_unit_price(&mut self, product_id: &str, price: Decimal) -> Result<()> {
        if price < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Unit price must be non-negative, got: {}",
                price
            )));
        }

        let item = self.find_mut(product_id)?;
        item.unit_price = price;
        // Keep the documented discount ≤ gross constraint after the edit.
        let gross = item.gross();
        if item.line_discount > gross {
            item.line_discount = gross;
        }
        self.recompute();
        Ok(())
    }

    /// Recompute every line subtotal and every aggregate from the stored
    /// fields. Idempotent: a second call with no intervening mutation
    /// produces identical values.
    pub fn recompute(&mut self) {
        let kind = self.kind;
        for item in &mut self.items {
            item.recompute(kind);
        }

        self.totals = LedgerTotals {
            total_quantity: self.items.iter().map(|i| i.quantity).sum(),
            sub_total: money::round_price(self.items.iter().map(|i| i.gross()).sum()),
            total_discount: money::round_price(
                self.items.iter().map(|i| i.line_discount).sum(),
            ),
            grand_total: money::round_price(self.items.iter().map(|i| i.subtotal).sum()),
        };
    }

    /// Discard all in-progress work; aggregates return to zero.
    pub fn reset(&mut self) {
        self.items.clear();
        self.totals = LedgerTotals::default();
    }

    /// Deep-copy the current lines and totals into an immutable snapshot
    /// tagged with `invoice_id`, without touching the ledger. Used when
    /// the snapshot must be persisted before the ledger may be cleared.
    pub fn snapshot(&mut self, invoice_id: InvoiceId) -> Result<FinalizedTransaction> {
        if self.items.is_empty() {
            return Err(AppError::validation("Cannot finalize an empty ledger"));
        }

        self.recompute();
        Ok(FinalizedTransaction::new(
            invoice_id,
            self.kind,
            self.items.clone(),
            self.totals,
        ))
    }

    /// Snapshot the ledger and clear it for the next transaction. Does
    /// not consume the invoice sequence; drawing the identifier is the
    /// caller's responsibility, immediately before this call.
    pub fn finalize(&mut self, invoice_id: InvoiceId) -> Result<FinalizedTransaction> {
        let snapshot = self.snapshot(invoice_id)?;
        self.reset();
        Ok(snapshot)
    }
}
