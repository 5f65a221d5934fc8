//! Invoice numbering.
//!
//! Every finalized transaction is labelled with one value drawn from a
//! single shop-wide counter. The counter is not per-day and not per-user;
//! it only ever moves forward.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};
use crate::storage::KeyValueStore;

/// Identifier handed to exactly one finalized transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceId {
    /// Raw counter value
    pub number: u64,
    /// Formatted label printed on the receipt, e.g. "INV-000042"
    pub label: String,
}

impl fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Hands out unique, strictly increasing invoice identifiers.
///
/// Implementations are single-terminal: nothing here guards two terminals
/// drawing from the same backing counter. A deployment that needs that
/// moves the counter behind a server-authoritative implementation of this
/// trait.
pub trait SequenceProvider: Send + Sync {
    /// Returns the current counter value as an [`InvoiceId`] and persists
    /// the incremented counter before handing it out. Call at most once
    /// per finalized transaction.
    fn next(&self) -> Result<InvoiceId>;
}

const COUNTER_KEY: &str = "sequence:invoice";

/// Sequence provider persisting its counter in the key-value store
pub struct StoredSequence {
    store: Arc<dyn KeyValueStore>,
    prefix: String,
}

impl StoredSequence {
    pub fn new(store: Arc<dyn KeyValueStore>, prefix: impl Into<String>) -> Self {
        Self {
            store,
            prefix: prefix.into(),
        }
    }

    fn read_counter(&self) -> Result<u64> {
        match self.store.get(COUNTER_KEY)? {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| AppError::storage(format!("corrupt invoice counter: '{raw}'"))),
            None => Ok(1),
        }
    }
}

impl SequenceProvider for StoredSequence {
    fn next(&self) -> Result<InvoiceId> {
        let number = self.read_counter()?;
        // Persist the successor before returning so a crash after this
        // point can skip a number but never reuse one.
        self.store.put(COUNTER_KEY, (number + 1).to_string())?;

        Ok(InvoiceId {
            number,
            label: format!("{}{:06}", self.prefix, number),
        })
    }
}
