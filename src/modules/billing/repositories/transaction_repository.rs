// TransactionRepository implementation
// Persists finalized transactions and in-progress ledger drafts as JSON
// documents in the key-value store.
//
// Finalized transactions are write-once: reporting and sales-return
// lookup read them, nothing updates them, and nothing deletes them in
// normal operation.

use std::sync::Arc;

use tracing::debug;

use crate::core::{AppError, Result};
use crate::modules::billing::models::{FinalizedTransaction, Ledger, TransactionKind};
use crate::storage::KeyValueStore;

const TXN_PREFIX: &str = "txn:";
const DRAFT_PREFIX: &str = "draft:";

/// Repository for finalized transactions and ledger drafts
#[derive(Clone)]
pub struct TransactionRepository {
    store: Arc<dyn KeyValueStore>,
}

impl TransactionRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn txn_key(kind: TransactionKind, number: u64) -> String {
        // Zero-padded so lexicographic key order matches invoice order.
        format!("{TXN_PREFIX}{}:{:012}", kind.as_str(), number)
    }

    fn draft_key(kind: TransactionKind) -> String {
        format!("{DRAFT_PREFIX}{}", kind.as_str())
    }

    /// Persist a finalized transaction. Refuses to overwrite: snapshots
    /// are immutable once written.
    pub fn save(&self, txn: &FinalizedTransaction) -> Result<()> {
        let key = Self::txn_key(txn.kind, txn.invoice_id.number);
        if self.store.get(&key)?.is_some() {
            return Err(AppError::validation(format!(
                "Transaction '{}' is already recorded",
                txn.invoice_id
            )));
        }

        self.store.put(&key, serde_json::to_string(txn)?)?;
        debug!(invoice = %txn.invoice_id, kind = %txn.kind, "transaction persisted");
        Ok(())
    }

    pub fn find(&self, kind: TransactionKind, number: u64) -> Result<Option<FinalizedTransaction>> {
        match self.store.get(&Self::txn_key(kind, number))? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// List every finalized transaction of one kind, in invoice order.
    pub fn list(&self, kind: TransactionKind) -> Result<Vec<FinalizedTransaction>> {
        let prefix = format!("{TXN_PREFIX}{}:", kind.as_str());
        let mut transactions = Vec::new();
        for key in self.store.keys(&prefix)? {
            if let Some(raw) = self.store.get(&key)? {
                transactions.push(serde_json::from_str::<FinalizedTransaction>(&raw)?);
            }
        }
        Ok(transactions)
    }

    /// Save the in-progress ledger so an interrupted session can resume.
    /// One draft slot per transaction kind.
    pub fn save_draft(&self, ledger: &Ledger) -> Result<()> {
        self.store
            .put(&Self::draft_key(ledger.kind()), serde_json::to_string(ledger)?)
    }

    pub fn load_draft(&self, kind: TransactionKind) -> Result<Option<Ledger>> {
        match self.store.get(&Self::draft_key(kind))? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn clear_draft(&self, kind: TransactionKind) -> Result<()> {
        self.store.remove(&Self::draft_key(kind))
    }
}
