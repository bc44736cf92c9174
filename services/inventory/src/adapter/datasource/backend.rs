use std::result::Result;
use std::sync::Arc;

use async_trait::async_trait;

use super::AbstractTransactionSource;
use crate::adapter::backend::AppBackendContext;
use crate::api::dto::TransactionListQueryDto;
use crate::auth::AppAuthSession;
use crate::error::AppError;
use crate::model::{try_collect_transactions, TransactionModel};

pub struct BackendTransactionSource<'a> {
    backend: Arc<AppBackendContext>,
    list_limit: u32,
    session: Option<&'a AppAuthSession>,
}

impl<'a> BackendTransactionSource<'a> {
    pub fn new(
        backend: Arc<AppBackendContext>,
        list_limit: u32,
        session: Option<&'a AppAuthSession>,
    ) -> Self {
        Self {
            backend,
            list_limit,
            session,
        }
    }
}

#[async_trait]
impl<'a> AbstractTransactionSource for BackendTransactionSource<'a> {
    /// inbound listing first, then outbound listing
    async fn fetch(&self) -> Result<Vec<TransactionModel>, AppError> {
        let query = TransactionListQueryDto {
            limit: Some(self.list_limit),
            ..Default::default()
        };
        let sess = self.session;
        let (inbound_api, outbound_api) = (self.backend.inbound(), self.backend.outbound());
        let (mut inbound, outbound) = tokio::try_join!(
            inbound_api.list(&query, sess),
            outbound_api.list(&query, sess),
        )?;
        inbound.extend(outbound);
        try_collect_transactions(inbound)
    }

    fn label(&self) -> &'static str {
        "backend"
    }
}
