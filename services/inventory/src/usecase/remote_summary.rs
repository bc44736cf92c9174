use std::result::Result;
use std::sync::Arc;

use crate::adapter::backend::{AppBackendContext, AppBackendError};
use crate::api::dto::{
    DashboardDataDto, ProductListQueryDto, StockQueryDto, TransactionListQueryDto,
};
use crate::auth::AppAuthSession;
use crate::model::StockMetricsModel;

#[derive(Debug)]
pub enum RemoteSummaryUcError {
    Backend(AppBackendError),
}

impl From<AppBackendError> for RemoteSummaryUcError {
    fn from(value: AppBackendError) -> Self {
        Self::Backend(value)
    }
}

pub struct RemoteSummaryUseCase<'a> {
    pub backend: Arc<AppBackendContext>,
    pub list_limit: u32,
    pub low_stock_threshold: i64,
    pub session: Option<&'a AppAuthSession>,
}

impl<'a> RemoteSummaryUseCase<'a> {
    /// inbound, outbound, products and current stock in one batch, any
    /// failing member fails the whole batch
    pub async fn dashboard_data(&self) -> Result<DashboardDataDto, RemoteSummaryUcError> {
        let sess = self.session;
        let txn_query = TransactionListQueryDto {
            limit: Some(self.list_limit),
            ..Default::default()
        };
        let (product_query, stock_query) =
            (ProductListQueryDto::default(), StockQueryDto::default());
        let (inbound_api, outbound_api, master_api, stock_api) = (
            self.backend.inbound(),
            self.backend.outbound(),
            self.backend.master(),
            self.backend.stock(),
        );
        let (inbound, outbound, products, stock) = tokio::try_join!(
            inbound_api.list(&txn_query, sess),
            outbound_api.list(&txn_query, sess),
            master_api.products(&product_query, sess),
            stock_api.current(&stock_query, sess),
        )?;
        Ok(DashboardDataDto {
            inbound,
            outbound,
            products,
            stock,
        })
    }

    /// metrics alone, from one stock listing
    pub async fn stock_metrics(&self) -> Result<StockMetricsModel, RemoteSummaryUcError> {
        let stock = self
            .backend
            .stock()
            .current(&StockQueryDto::default(), self.session)
            .await?;
        Ok(StockMetricsModel::calculate(
            stock.as_slice(),
            self.low_stock_threshold,
        ))
    }

    /// the metrics reuse the stock listing of the batch
    pub async fn execute(
        self,
    ) -> Result<(DashboardDataDto, StockMetricsModel), RemoteSummaryUcError> {
        let data = self.dashboard_data().await?;
        let metrics =
            StockMetricsModel::calculate(data.stock.as_slice(), self.low_stock_threshold);
        Ok((data, metrics))
    }
}
