use inventory::api::dto::{StockLevelDto, StockMetricsDto};
use inventory::model::{
    DashboardMetricsModel, StockLevelModelSet, StockMetricsModel, TransactionStatus,
    TransactionType,
};

use crate::ut_txn;

#[rustfmt::skip]
#[test]
fn dashboard_cards() {
    let txns = [
        ut_txn("1", "Laptop Dell XPS", "SKU-1", TransactionType::Inbound, 50, "Warehouse A", "2024-01-05", TransactionStatus::Completed),
        ut_txn("2", "Laptop Dell XPS", "SKU-1", TransactionType::Outbound, 20, "Warehouse B", "2024-01-10", TransactionStatus::Completed),
        ut_txn("3", "iPad Air", "SKU-2", TransactionType::Inbound, 30, "Storage 1", "2024-01-15", TransactionStatus::Pending),
        ut_txn("4", "iPad Air", "SKU-2", TransactionType::Outbound, 3, "Storage 1", "2024-01-16", TransactionStatus::Pending),
        ut_txn("5", "Sony Headphones", "SKU-3", TransactionType::Inbound, 8, "Warehouse C", "2024-01-17", TransactionStatus::Processing),
    ];
    let stock = StockLevelModelSet::from_transactions(&txns);
    let metrics = DashboardMetricsModel::calculate(&txns, &stock);
    let expect = DashboardMetricsModel {
        total_stock: 30,
        inbound: 50,
        outbound: 20,
        unique_products: 1,
        pending: 2,
    };
    assert_eq!(metrics, expect);
}

#[test]
fn dashboard_cards_empty() {
    let stock = StockLevelModelSet::default();
    let metrics = DashboardMetricsModel::calculate(&[], &stock);
    assert_eq!(metrics, DashboardMetricsModel::default());
}

fn ut_stock_level(sku: &str, quantity: i64) -> StockLevelDto {
    StockLevelDto {
        product: format!("product-{sku}"),
        sku: sku.to_string(),
        quantity,
        location: None,
    }
}

#[test]
fn backend_stock_metrics() {
    let stock = [
        ut_stock_level("a", 120),
        ut_stock_level("b", 9),
        ut_stock_level("c", 10),
        ut_stock_level("d", 0),
    ];
    let metrics = StockMetricsModel::calculate(&stock, 10);
    assert_eq!(metrics.total_stock, 139);
    assert_eq!(metrics.unique_products, 4);
    // strictly below the threshold
    assert_eq!(metrics.low_stock_items, 2);
    let dto = StockMetricsDto::from(metrics);
    let value = serde_json::to_value(&dto).unwrap();
    assert_eq!(value["totalStock"].as_i64(), Some(139));
    assert_eq!(value["uniqueProducts"].as_u64(), Some(4));
    assert_eq!(value["lowStockItems"].as_u64(), Some(2));
}

#[test]
fn backend_stock_metrics_custom_threshold() {
    let stock = [ut_stock_level("a", 120), ut_stock_level("b", 9)];
    let metrics = StockMetricsModel::calculate(&stock, 200);
    assert_eq!(metrics.low_stock_items, 2);
    let metrics = StockMetricsModel::calculate(&[], 10);
    assert_eq!(metrics, StockMetricsModel::default());
}

#[test]
fn backend_stock_total_saturates() {
    let stock = [ut_stock_level("a", i64::MAX), ut_stock_level("b", 5)];
    let metrics = StockMetricsModel::calculate(&stock, 10);
    assert_eq!(metrics.total_stock, i64::MAX);
    assert_eq!(metrics.unique_products, 2);
    assert_eq!(metrics.low_stock_items, 1);
    let stock = [ut_stock_level("a", i64::MIN), ut_stock_level("b", -5)];
    let metrics = StockMetricsModel::calculate(&stock, 10);
    assert_eq!(metrics.total_stock, i64::MIN);
}
