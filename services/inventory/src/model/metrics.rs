use crate::api::dto::{StockLevelDto, StockMetricsDto};

use super::{StockLevelModelSet, TransactionModel, TransactionStatus, TransactionType};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardMetricsModel {
    pub total_stock: i64,
    pub inbound: u64,
    pub outbound: u64,
    pub unique_products: usize,
    pub pending: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StockMetricsModel {
    pub total_stock: i64,
    pub unique_products: usize,
    pub low_stock_items: usize,
}

fn sum_completed(txns: &[TransactionModel], type_: TransactionType) -> u64 {
    txns.iter()
        .filter(|t| t.is_completed(type_))
        .map(|t| t.quantity as u64)
        .sum()
}

impl DashboardMetricsModel {
    pub fn calculate(txns: &[TransactionModel], stock: &StockLevelModelSet) -> Self {
        let pending = txns
            .iter()
            .filter(|t| t.status == TransactionStatus::Pending)
            .count();
        Self {
            total_stock: stock.total_quantity(),
            inbound: sum_completed(txns, TransactionType::Inbound),
            outbound: sum_completed(txns, TransactionType::Outbound),
            unique_products: stock.len(),
            pending,
        }
    }
}

impl StockMetricsModel {
    // the stock levels come from the backend as they are, no aggregation
    // here. The total saturates instead of overflowing on unchecked input
    pub fn calculate(stock: &[StockLevelDto], low_threshold: i64) -> Self {
        let total_stock = stock
            .iter()
            .fold(0i64, |acc, s| acc.saturating_add(s.quantity));
        Self {
            total_stock,
            unique_products: stock.len(),
            low_stock_items: stock.iter().filter(|s| s.quantity < low_threshold).count(),
        }
    }
}

impl From<StockMetricsModel> for StockMetricsDto {
    fn from(value: StockMetricsModel) -> Self {
        Self {
            total_stock: value.total_stock,
            unique_products: value.unique_products,
            low_stock_items: value.low_stock_items,
        }
    }
}
