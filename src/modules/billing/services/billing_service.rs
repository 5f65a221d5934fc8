use tracing::{debug, info, warn};

use crate::core::{AppError, Result};
use crate::modules::billing::models::{FinalizedTransaction, Ledger, TransactionKind};
use crate::modules::billing::repositories::TransactionRepository;
use crate::modules::catalog::ProductRepository;
use crate::modules::sequence::SequenceProvider;

/// Service orchestrating the billing workflow: catalog lookup into the
/// ledger, checkout (sequence → snapshot → persist → stock), and draft
/// save/resume.
pub struct BillingService {
    products: ProductRepository,
    transactions: TransactionRepository,
    sequence: Box<dyn SequenceProvider>,
}

impl BillingService {
    pub fn new(
        products: ProductRepository,
        transactions: TransactionRepository,
        sequence: Box<dyn SequenceProvider>,
    ) -> Self {
        Self {
            products,
            transactions,
            sequence,
        }
    }

    /// Resolve the operator's lookup input (exact id, or case-insensitive
    /// exact name) and add one unit to the ledger. A miss surfaces as
    /// `NotFound` for the screen to prompt on; the ledger is untouched.
    pub fn add_by_key(&self, ledger: &mut Ledger, lookup_key: &str) -> Result<()> {
        let product = self
            .products
            .find_by_key(lookup_key)?
            .ok_or_else(|| AppError::not_found(format!("No product matches '{}'", lookup_key)))?;

        ledger.add_or_increment(&product);
        debug!(product = %product.id, name = %product.name, "line item added");
        Ok(())
    }

    /// Finalize the ledger: draw the next invoice number, persist the
    /// snapshot, apply stock movements, clear the ledger and its draft.
    ///
    /// The sequence is consumed immediately before the snapshot so the
    /// two cannot diverge. If persisting fails the ledger keeps its
    /// in-progress state so the operator can retry.
    pub fn checkout(&self, ledger: &mut Ledger) -> Result<FinalizedTransaction> {
        if ledger.is_empty() {
            return Err(AppError::validation("Cannot finalize an empty ledger"));
        }

        let invoice_id = self.sequence.next()?;
        let txn = ledger.snapshot(invoice_id)?;
        self.transactions.save(&txn)?;

        // Only clear in-progress state once the snapshot is durable.
        ledger.reset();
        if let Err(error) = self.transactions.clear_draft(txn.kind) {
            warn!(%error, "stale ledger draft left behind");
        }

        self.apply_stock_movements(&txn);

        info!(
            invoice = %txn.invoice_id,
            kind = %txn.kind,
            total = %txn.totals.grand_total,
            "transaction finalized"
        );
        Ok(txn)
    }

    /// Stock moves opposite to the goods: sales take units off the shelf,
    /// purchases and returns bring them back. The snapshot is already
    /// durable, so a missing product only logs — it cannot fail checkout.
    fn apply_stock_movements(&self, txn: &FinalizedTransaction) {
        let direction: i64 = match txn.kind {
            TransactionKind::Sale => -1,
            TransactionKind::Purchase | TransactionKind::Return => 1,
        };

        for item in &txn.items {
            match self.products.find_by_id(&item.product_id) {
                Ok(Some(mut product)) => {
                    product.stock += direction * item.quantity;
                    if let Err(error) = self.products.update(&product) {
                        warn!(product = %item.product_id, %error, "stock update failed");
                    }
                }
                Ok(None) => {
                    warn!(product = %item.product_id, "stock adjustment skipped, product missing");
                }
                Err(error) => {
                    warn!(product = %item.product_id, %error, "stock lookup failed");
                }
            }
        }
    }

    /// Persist the in-progress ledger so the session can resume later.
    pub fn save_draft(&self, ledger: &Ledger) -> Result<()> {
        self.transactions.save_draft(ledger)
    }

    /// Restore a previously saved in-progress ledger, if any.
    pub fn load_draft(&self, kind: TransactionKind) -> Result<Option<Ledger>> {
        self.transactions.load_draft(kind)
    }
}
