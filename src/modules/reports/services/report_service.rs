use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::core::{AppError, Result};
use crate::modules::billing::models::{FinalizedTransaction, TransactionKind};
use crate::modules::billing::repositories::TransactionRepository;
use crate::modules::reports::models::{DailyRow, PeriodSummary, ProfitSummary};

/// Service for read-only rollups over finalized transactions.
///
/// Read contract: reporting never mutates a finalized transaction; this
/// service only holds repository reads and folds over clones.
pub struct ReportService {
    transactions: TransactionRepository,
}

impl ReportService {
    pub fn new(transactions: TransactionRepository) -> Self {
        Self { transactions }
    }

    /// Rollup of finalized sales within the inclusive date range.
    pub fn sales_summary(&self, from: NaiveDate, to: NaiveDate) -> Result<PeriodSummary> {
        self.period_summary(TransactionKind::Sale, from, to)
    }

    /// Rollup of finalized purchases within the inclusive date range.
    pub fn purchase_summary(&self, from: NaiveDate, to: NaiveDate) -> Result<PeriodSummary> {
        self.period_summary(TransactionKind::Purchase, from, to)
    }

    fn period_summary(
        &self,
        kind: TransactionKind,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<PeriodSummary> {
        Self::validate_range(from, to)?;

        let mut summary = PeriodSummary {
            from,
            to,
            transaction_count: 0,
            total_quantity: 0,
            revenue: Decimal::ZERO,
            total_discount: Decimal::ZERO,
        };

        for txn in self.in_range(kind, from, to)? {
            summary.transaction_count += 1;
            summary.total_quantity += txn.totals.total_quantity;
            summary.revenue += txn.totals.grand_total;
            summary.total_discount += txn.totals.total_discount;
        }

        if summary.is_empty() {
            warn!(%kind, %from, %to, "empty report period");
        } else {
            info!(
                %kind, %from, %to,
                transactions = summary.transaction_count,
                revenue = %summary.revenue,
                "period summary generated"
            );
        }

        Ok(summary)
    }

    /// Sales minus returns minus purchase outlay for the range. Returns
    /// are netted against sales: a refunded bill reduces takings.
    pub fn profit_summary(&self, from: NaiveDate, to: NaiveDate) -> Result<ProfitSummary> {
        Self::validate_range(from, to)?;

        let total = |kind| -> Result<Decimal> {
            Ok(self
                .in_range(kind, from, to)?
                .iter()
                .map(|t| t.totals.grand_total)
                .sum())
        };

        let sales_revenue = total(TransactionKind::Sale)?;
        let returns_refunded = total(TransactionKind::Return)?;
        let purchase_outlay = total(TransactionKind::Purchase)?;

        Ok(ProfitSummary {
            from,
            to,
            sales_revenue,
            returns_refunded,
            purchase_outlay,
            profit: sales_revenue - returns_refunded - purchase_outlay,
        })
    }

    /// Per-day sales rows for the range, ascending by date. Days with no
    /// sales are omitted.
    pub fn daily_breakdown(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<DailyRow>> {
        Self::validate_range(from, to)?;

        let mut days: BTreeMap<NaiveDate, (usize, Decimal)> = BTreeMap::new();
        for txn in self.in_range(TransactionKind::Sale, from, to)? {
            let entry = days.entry(txn.date()).or_insert((0, Decimal::ZERO));
            entry.0 += 1;
            entry.1 += txn.totals.grand_total;
        }

        Ok(days
            .into_iter()
            .map(|(date, (transaction_count, revenue))| DailyRow {
                date,
                transaction_count,
                revenue,
            })
            .collect())
    }

    fn in_range(
        &self,
        kind: TransactionKind,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<FinalizedTransaction>> {
        Ok(self
            .transactions
            .list(kind)?
            .into_iter()
            .filter(|txn| {
                let date = txn.date();
                date >= from && date <= to
            })
            .collect())
    }

    fn validate_range(from: NaiveDate, to: NaiveDate) -> Result<()> {
        if from > to {
            return Err(AppError::validation(format!(
                "from ({}) must be before or equal to to ({})",
                from, to
            )));
        }

        Ok(())
    }
}
