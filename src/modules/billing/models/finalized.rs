// FinalizedTransaction model.
//
// The immutable snapshot taken when a ledger is finalized. Later edits to
// product master data must never alter the values frozen here, which is
// why the line items carry their own denormalized name and price.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::sequence::InvoiceId;

use super::ledger::LedgerTotals;
use super::line_item::{LineItem, TransactionKind};

/// A completed sale, purchase, or return
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalizedTransaction {
    /// Identifier drawn from the invoice sequence
    pub invoice_id: InvoiceId,

    /// Which side of the counter this transaction was
    pub kind: TransactionKind,

    /// When the ledger was finalized
    pub finalized_at: DateTime<Utc>,

    /// Frozen line items
    pub items: Vec<LineItem>,

    /// Frozen aggregates at finalization time
    pub totals: LedgerTotals,
}

impl FinalizedTransaction {
    pub fn new(
        invoice_id: InvoiceId,
        kind: TransactionKind,
        items: Vec<LineItem>,
        totals: LedgerTotals,
    ) -> Self {
        Self {
            invoice_id,
            kind,
            finalized_at: Utc::now(),
            items,
            totals,
        }
    }

    /// Calendar date used by report range filters.
    pub fn date(&self) -> NaiveDate {
        self.finalized_at.date_naive()
    }
}
