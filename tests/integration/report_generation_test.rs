// Integration test for report generation over finalized transactions:
// period rollups, profit, date-wise breakdown, and the read-only
// contract (reporting never mutates a stored snapshot).

use std::sync::Arc;

use chrono::{Duration, Utc};
use rust_decimal_macros::dec;

use weavepos::billing::{BillingService, Ledger, TransactionKind, TransactionRepository};
use weavepos::catalog::{Product, ProductRepository};
use weavepos::core::telemetry;
use weavepos::reports::ReportService;
use weavepos::sequence::StoredSequence;
use weavepos::storage::MemoryStore;

struct TestPos {
    billing: BillingService,
    transactions: TransactionRepository,
    reports: ReportService,
    saree: Product,
    dye: Product,
}

fn setup() -> TestPos {
    telemetry::init();

    let store: Arc<MemoryStore> = Arc::new(MemoryStore::new());
    let products = ProductRepository::new(store.clone());
    let transactions = TransactionRepository::new(store.clone());
    let billing = BillingService::new(
        products.clone(),
        transactions.clone(),
        Box::new(StoredSequence::new(store, "INV-")),
    );
    let reports = ReportService::new(transactions.clone());

    let saree = Product::new("Cotton Saree", dec!(100))
        .unwrap()
        .with_stock(50);
    let dye = Product::new("Dye Lot", dec!(40)).unwrap().with_stock(0);
    products.create(&saree).unwrap();
    products.create(&dye).unwrap();

    TestPos {
        billing,
        transactions,
        reports,
        saree,
        dye,
    }
}

fn ring_up(pos: &TestPos, kind: TransactionKind, product: &Product, quantity: i64) {
    let mut ledger = Ledger::new(kind);
    pos.billing.add_by_key(&mut ledger, &product.id).unwrap();
    ledger.set_quantity(&product.id, quantity).unwrap();
    pos.billing.checkout(&mut ledger).unwrap();
}

#[test]
fn test_sales_summary_over_today() {
    let pos = setup();
    ring_up(&pos, TransactionKind::Sale, &pos.saree, 2); // 200
    ring_up(&pos, TransactionKind::Sale, &pos.saree, 1); // 100
    ring_up(&pos, TransactionKind::Purchase, &pos.dye, 5); // not a sale

    let today = Utc::now().date_naive();
    let summary = pos.reports.sales_summary(today, today).unwrap();

    assert_eq!(summary.transaction_count, 2);
    assert_eq!(summary.total_quantity, 3);
    assert_eq!(summary.revenue, dec!(300.00));
    assert_eq!(summary.total_discount, dec!(0.00));
}

#[test]
fn test_profit_nets_returns_and_purchases() {
    let pos = setup();
    ring_up(&pos, TransactionKind::Sale, &pos.saree, 5); // 500 in
    ring_up(&pos, TransactionKind::Return, &pos.saree, 1); // 100 back out
    ring_up(&pos, TransactionKind::Purchase, &pos.dye, 5); // 200 spent

    let today = Utc::now().date_naive();
    let profit = pos.reports.profit_summary(today, today).unwrap();

    assert_eq!(profit.sales_revenue, dec!(500.00));
    assert_eq!(profit.returns_refunded, dec!(100.00));
    assert_eq!(profit.purchase_outlay, dec!(200.00));
    assert_eq!(profit.profit, dec!(200.00));
}

#[test]
fn test_daily_breakdown_single_day() {
    let pos = setup();
    ring_up(&pos, TransactionKind::Sale, &pos.saree, 2);
    ring_up(&pos, TransactionKind::Sale, &pos.saree, 3);

    let today = Utc::now().date_naive();
    let rows = pos
        .reports
        .daily_breakdown(today - Duration::days(7), today)
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].date, today);
    assert_eq!(rows[0].transaction_count, 2);
    assert_eq!(rows[0].revenue, dec!(500.00));
}

#[test]
fn test_empty_period_yields_zeroes() {
    let pos = setup();
    ring_up(&pos, TransactionKind::Sale, &pos.saree, 1);

    let last_week = Utc::now().date_naive() - Duration::days(7);
    let summary = pos
        .reports
        .sales_summary(last_week - Duration::days(1), last_week)
        .unwrap();

    assert!(summary.is_empty());
    assert_eq!(summary.revenue, dec!(0));
}

#[test]
fn test_inverted_range_rejected() {
    let pos = setup();
    let today = Utc::now().date_naive();
    let result = pos.reports.sales_summary(today, today - Duration::days(1));
    assert!(result.is_err());
}

#[test]
fn test_reporting_never_mutates_transactions() {
    let pos = setup();
    ring_up(&pos, TransactionKind::Sale, &pos.saree, 2);

    let before = pos.transactions.list(TransactionKind::Sale).unwrap();

    let today = Utc::now().date_naive();
    pos.reports.sales_summary(today, today).unwrap();
    pos.reports.profit_summary(today, today).unwrap();
    pos.reports.daily_breakdown(today, today).unwrap();

    let after = pos.transactions.list(TransactionKind::Sale).unwrap();
    assert_eq!(before, after);
}
