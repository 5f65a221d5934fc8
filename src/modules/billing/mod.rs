// Billing module: the line-item ledger and finalized transactions

pub mod models;
pub mod repositories;
pub mod services;

pub use models::{
    FinalizedTransaction, Ledger, LedgerState, LedgerTotals, LineItem, TransactionKind,
};
pub use repositories::TransactionRepository;
pub use services::BillingService;
