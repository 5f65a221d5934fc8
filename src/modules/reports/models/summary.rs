use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// Rollup over one transaction kind for an inclusive date range
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodSummary {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub transaction_count: usize,
    pub total_quantity: i64,
    /// Σ grand_total over the matching transactions
    pub revenue: Decimal,
    pub total_discount: Decimal,
}

impl PeriodSummary {
    pub fn is_empty(&self) -> bool {
        self.transaction_count == 0
    }
}

/// Sales against purchases for an inclusive date range
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfitSummary {
    pub from: NaiveDate,
    pub to: NaiveDate,
    /// Gross takings from sales
    pub sales_revenue: Decimal,
    /// Refunds handed back on returns
    pub returns_refunded: Decimal,
    /// Spent restocking from suppliers
    pub purchase_outlay: Decimal,
    /// sales − returns − purchases
    pub profit: Decimal,
}

/// One row of the date-wise sales table handed to the export collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyRow {
    pub date: NaiveDate,
    pub transaction_count: usize,
    pub revenue: Decimal,
}
