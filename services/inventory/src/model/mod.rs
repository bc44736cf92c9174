mod filter;
mod metrics;
mod stock_level;
mod transaction;

pub use filter::{TransactionFilterModel, TxnStatusFilter, TxnTypeFilter};
pub use metrics::{DashboardMetricsModel, StockMetricsModel};
pub use stock_level::{StockEntryModel, StockKey, StockLevelModelSet};
pub use transaction::{
    try_collect_transactions, TransactionModel, TransactionStatus, TransactionType,
};
