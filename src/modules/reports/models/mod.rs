pub mod summary;

pub use summary::{DailyRow, PeriodSummary, ProfitSummary};
