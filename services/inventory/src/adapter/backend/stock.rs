use hyper::Method;

use super::{query_suffix, AppBackendContext, AppBackendError};
use crate::api::dto::{StockLevelDto, StockQueryDto, TaskDto, TaskQueryDto};
use crate::auth::AppAuthSession;
use crate::constant::api_path;

pub struct StockTaskApi<'a> {
    ctx: &'a AppBackendContext,
}

impl<'a> StockTaskApi<'a> {
    pub(super) fn new(ctx: &'a AppBackendContext) -> Self {
        Self { ctx }
    }

    pub async fn current(
        &self,
        query: &StockQueryDto,
        session: Option<&AppAuthSession>,
    ) -> Result<Vec<StockLevelDto>, AppBackendError> {
        let base = api_path::STOCK;
        let path = base.to_string() + query_suffix(base, query)?.as_str();
        self.ctx
            .request(path.as_str(), Method::GET, session, None)
            .await
    }

    pub async fn by_product(
        &self,
        product_id: &str,
        session: Option<&AppAuthSession>,
    ) -> Result<Vec<StockLevelDto>, AppBackendError> {
        let path = format!("{}/product/{}", api_path::STOCK, product_id);
        self.ctx
            .request(path.as_str(), Method::GET, session, None)
            .await
    }

    pub async fn by_location(
        &self,
        location_id: &str,
        session: Option<&AppAuthSession>,
    ) -> Result<Vec<StockLevelDto>, AppBackendError> {
        let path = format!("{}/location/{}", api_path::STOCK, location_id);
        self.ctx
            .request(path.as_str(), Method::GET, session, None)
            .await
    }

    pub async fn tasks(
        &self,
        query: &TaskQueryDto,
        session: Option<&AppAuthSession>,
    ) -> Result<Vec<TaskDto>, AppBackendError> {
        let base = api_path::TASKS;
        let path = base.to_string() + query_suffix(base, query)?.as_str();
        self.ctx
            .request(path.as_str(), Method::GET, session, None)
            .await
    }
}
