use std::collections::HashMap;

use chrono::NaiveDate;

use inventory::adapter::datasource::MockTransactionSource;
use inventory::model::{
    StockKey, StockLevelModelSet, TransactionModel, TransactionStatus, TransactionType,
};

use crate::ut_txn;

#[rustfmt::skip]
#[test]
fn aggregate_inbound_minus_outbound() {
    let txns = [
        ut_txn("1", "A", "1", TransactionType::Inbound, 10, "Warehouse A", "2024-01-01", TransactionStatus::Completed),
        ut_txn("2", "A", "1", TransactionType::Outbound, 4, "Warehouse A", "2024-01-02", TransactionStatus::Completed),
    ];
    let stock = StockLevelModelSet::from_transactions(&txns);
    assert_eq!(stock.len(), 1);
    let entry = &stock.entries[0];
    assert_eq!(entry.key.product.as_str(), "A");
    assert_eq!(entry.key.sku.as_str(), "1");
    assert_eq!(entry.quantity, 6);
}

#[rustfmt::skip]
#[test]
fn aggregate_pending_contributes_nothing() {
    let txns = [
        ut_txn("1", "A", "1", TransactionType::Inbound, 10, "Warehouse A", "2024-01-01", TransactionStatus::Pending),
        ut_txn("2", "A", "1", TransactionType::Outbound, 4, "Warehouse A", "2024-01-02", TransactionStatus::Pending),
    ];
    let stock = StockLevelModelSet::from_transactions(&txns);
    assert!(stock.is_empty());
    assert_eq!(stock.total_quantity(), 0);
}

#[test]
fn aggregate_empty_input() {
    let txns: Vec<TransactionModel> = Vec::new();
    let stock = StockLevelModelSet::from_transactions(&txns);
    assert!(stock.is_empty());
}

#[rustfmt::skip]
#[test]
fn location_from_first_seen_transaction() {
    let txns = [
        // not completed, still the first time the key appears
        ut_txn("1", "iPad Air", "SKU-2", TransactionType::Inbound, 30, "Storage 1", "2024-01-15", TransactionStatus::Pending),
        ut_txn("2", "iPad Air", "SKU-2", TransactionType::Inbound, 12, "Storage 2", "2024-01-20", TransactionStatus::Completed),
        ut_txn("3", "iPad Air", "SKU-2", TransactionType::Outbound, 2, "Warehouse B", "2024-01-21", TransactionStatus::Completed),
    ];
    let stock = StockLevelModelSet::from_transactions(&txns);
    let entry = stock.find("iPad Air", "SKU-2").unwrap();
    assert_eq!(entry.quantity, 10);
    assert_eq!(entry.location.as_str(), "Storage 1");
}

#[rustfmt::skip]
#[test]
fn drop_non_positive_and_keep_first_appearance_order() {
    let txns = [
        ut_txn("1", "C", "3", TransactionType::Outbound, 5, "Warehouse C", "2024-01-01", TransactionStatus::Completed),
        ut_txn("2", "B", "2", TransactionType::Inbound, 7, "Warehouse B", "2024-01-02", TransactionStatus::Completed),
        ut_txn("3", "D", "4", TransactionType::Inbound, 4, "Storage 1", "2024-01-03", TransactionStatus::Completed),
        ut_txn("4", "D", "4", TransactionType::Outbound, 4, "Storage 1", "2024-01-04", TransactionStatus::Completed),
        // negative running total recovers later
        ut_txn("5", "C", "3", TransactionType::Inbound, 8, "Warehouse A", "2024-01-05", TransactionStatus::Completed),
        ut_txn("6", "A", "1", TransactionType::Inbound, 1, "Storage 2", "2024-01-06", TransactionStatus::Completed),
    ];
    let stock = StockLevelModelSet::from_transactions(&txns);
    let actual = stock
        .entries
        .iter()
        .map(|e| (e.key.product.as_str(), e.quantity, e.location.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(
        actual,
        vec![("C", 3, "Warehouse C"), ("B", 7, "Warehouse B"), ("A", 1, "Storage 2")]
    );
}

#[rustfmt::skip]
#[test]
fn composite_key_never_collides() {
    let txns = [
        ut_txn("1", "A-B", "C", TransactionType::Inbound, 2, "Storage 1", "2024-01-01", TransactionStatus::Completed),
        ut_txn("2", "A", "B-C", TransactionType::Inbound, 3, "Storage 1", "2024-01-01", TransactionStatus::Completed),
    ];
    let stock = StockLevelModelSet::from_transactions(&txns);
    assert_eq!(stock.len(), 2);
    assert_eq!(stock.find("A-B", "C").unwrap().quantity, 2);
    assert_eq!(stock.find("A", "B-C").unwrap().quantity, 3);
}

#[rustfmt::skip]
#[test]
fn same_product_different_sku() {
    let txns = [
        ut_txn("1", "Logitech Mouse", "SKU-1", TransactionType::Inbound, 2, "Storage 1", "2024-01-01", TransactionStatus::Completed),
        ut_txn("2", "Logitech Mouse", "SKU-2", TransactionType::Inbound, 3, "Storage 2", "2024-01-01", TransactionStatus::Completed),
    ];
    let stock = StockLevelModelSet::from_transactions(&txns);
    assert_eq!(stock.len(), 2);
    assert_eq!(stock.total_quantity(), 5);
}

fn ut_mock_txns(seed: u64, num: u32) -> Vec<TransactionModel> {
    let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
    MockTransactionSource::new(num, Some(seed), today).generate()
}

#[test]
fn positive_and_idempotent_on_generated_data() {
    for seed in [1u64, 7, 2024, 99991] {
        let txns = ut_mock_txns(seed, 400);
        let stock1 = StockLevelModelSet::from_transactions(&txns);
        let stock2 = StockLevelModelSet::from_transactions(&txns);
        assert_eq!(stock1, stock2);
        assert!(stock1.entries.iter().all(|e| e.quantity > 0));
    }
}

#[test]
fn total_matches_net_of_positive_keys() {
    let txns = ut_mock_txns(31337, 1500);
    let mut net: HashMap<StockKey, i64> = HashMap::new();
    txns.iter()
        .map(|t| {
            let v = net.entry(StockKey::from(t)).or_insert(0);
            *v += t.stock_delta().unwrap_or(0);
        })
        .count();
    let expect: i64 = net.values().filter(|v| **v > 0).sum();
    let stock = StockLevelModelSet::from_transactions(&txns);
    assert_eq!(stock.total_quantity(), expect);
    assert_eq!(stock.len(), net.values().filter(|v| **v > 0).count());
}
