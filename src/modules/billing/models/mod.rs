pub mod finalized;
pub mod ledger;
pub mod line_item;

pub use finalized::FinalizedTransaction;
pub use ledger::{Ledger, LedgerState, LedgerTotals};
pub use line_item::{LineItem, TransactionKind};
