use hyper::Method;

use super::{query_suffix, serialize_body, AppBackendContext, AppBackendError};
use crate::api::dto::{
    TransactionCreateReqDto, TransactionDto, TransactionListQueryDto, TransactionUpdateReqDto,
};
use crate::auth::AppAuthSession;
use crate::constant::api_path;
use crate::model::TransactionType;

/// inbound and outbound services share the same resource layout, only the
/// base path differs
pub struct TransactionApi<'a> {
    ctx: &'a AppBackendContext,
    base_path: &'static str,
}

impl<'a> TransactionApi<'a> {
    pub(super) fn new(ctx: &'a AppBackendContext, direction: TransactionType) -> Self {
        let base_path = match direction {
            TransactionType::Inbound => api_path::INBOUND_TXN,
            TransactionType::Outbound => api_path::OUTBOUND_TXN,
        };
        Self { ctx, base_path }
    }

    fn item_path(&self, id: &str) -> String {
        format!("{}/{}", self.base_path, id)
    }

    pub async fn list(
        &self,
        query: &TransactionListQueryDto,
        session: Option<&AppAuthSession>,
    ) -> Result<Vec<TransactionDto>, AppBackendError> {
        let path = self.base_path.to_string() + query_suffix(self.base_path, query)?.as_str();
        self.ctx
            .request(path.as_str(), Method::GET, session, None)
            .await
    }

    pub async fn create(
        &self,
        req: &TransactionCreateReqDto,
        session: Option<&AppAuthSession>,
    ) -> Result<TransactionDto, AppBackendError> {
        let body = serialize_body(self.base_path, req)?;
        self.ctx
            .request(self.base_path, Method::POST, session, Some(body))
            .await
    }

    pub async fn get(
        &self,
        id: &str,
        session: Option<&AppAuthSession>,
    ) -> Result<TransactionDto, AppBackendError> {
        let path = self.item_path(id);
        self.ctx
            .request(path.as_str(), Method::GET, session, None)
            .await
    }

    pub async fn update(
        &self,
        id: &str,
        req: &TransactionUpdateReqDto,
        session: Option<&AppAuthSession>,
    ) -> Result<TransactionDto, AppBackendError> {
        let path = self.item_path(id);
        let body = serialize_body(path.as_str(), req)?;
        self.ctx
            .request(path.as_str(), Method::PUT, session, Some(body))
            .await
    }
} // end of impl TransactionApi
