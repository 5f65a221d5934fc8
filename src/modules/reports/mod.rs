// Reports module: read-only rollups over finalized transactions

pub mod models;
pub mod services;

pub use models::{DailyRow, PeriodSummary, ProfitSummary};
pub use services::ReportService;
