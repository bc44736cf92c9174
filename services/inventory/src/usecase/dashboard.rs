use std::boxed::Box;
use std::result::Result;
use std::sync::Arc;

use wms_common::logging::{app_log_event, AppLogContext, AppLogLevel};

use crate::adapter::datasource::AbstractTransactionSource;
use crate::error::AppError;
use crate::model::{
    DashboardMetricsModel, StockLevelModelSet, TransactionFilterModel, TransactionModel,
};

#[derive(Debug)]
pub enum DashboardViewUcError {
    DataSource(AppError),
}

/// Everything the dashboard renders. The stock list and the metric cards
/// always come from the complete sequence, only `filtered` depends on
/// the filter.
pub struct DashboardViewModel {
    pub transactions: Vec<TransactionModel>,
    pub filtered: Vec<TransactionModel>,
    pub stock: StockLevelModelSet,
    pub metrics: DashboardMetricsModel,
    pub recent: Vec<TransactionModel>,
}

impl DashboardViewModel {
    pub fn build(
        transactions: Vec<TransactionModel>,
        filter: &TransactionFilterModel,
        num_recent: usize,
    ) -> Self {
        let stock = StockLevelModelSet::from_transactions(&transactions);
        let metrics = DashboardMetricsModel::calculate(&transactions, &stock);
        let filtered = filter.apply(&transactions);
        let recent = transactions.iter().take(num_recent).cloned().collect();
        Self {
            transactions,
            filtered,
            stock,
            metrics,
            recent,
        }
    }
}

pub struct DashboardViewUseCase<'a> {
    pub source: Box<dyn AbstractTransactionSource + 'a>,
    pub num_recent: usize,
    pub logctx: Arc<AppLogContext>,
}

impl<'a> DashboardViewUseCase<'a> {
    pub async fn execute(
        self,
        filter: TransactionFilterModel,
    ) -> Result<DashboardViewModel, DashboardViewUcError> {
        let logctx = &self.logctx;
        let txns = self.source.fetch().await.map_err(|e| {
            app_log_event!(
                logctx,
                AppLogLevel::ERROR,
                "source:{}, {}",
                self.source.label(),
                &e
            );
            DashboardViewUcError::DataSource(e)
        })?;
        let out = DashboardViewModel::build(txns, &filter, self.num_recent);
        app_log_event!(
            logctx,
            AppLogLevel::INFO,
            "source:{}, num-txns:{}, num-filtered:{}, num-stock:{}",
            self.source.label(),
            out.transactions.len(),
            out.filtered.len(),
            out.stock.len()
        );
        Ok(out)
    }
}
