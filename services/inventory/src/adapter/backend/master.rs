use hyper::Method;

use super::{query_suffix, AppBackendContext, AppBackendError};
use crate::api::dto::{LocationDto, ProductDto, ProductListQueryDto, SkuDto};
use crate::auth::AppAuthSession;
use crate::constant::api_path;

pub struct MasterDataApi<'a> {
    ctx: &'a AppBackendContext,
}

impl<'a> MasterDataApi<'a> {
    pub(super) fn new(ctx: &'a AppBackendContext) -> Self {
        Self { ctx }
    }

    pub async fn products(
        &self,
        query: &ProductListQueryDto,
        session: Option<&AppAuthSession>,
    ) -> Result<Vec<ProductDto>, AppBackendError> {
        let base = api_path::MASTER_PRODUCTS;
        let path = base.to_string() + query_suffix(base, query)?.as_str();
        self.ctx
            .request(path.as_str(), Method::GET, session, None)
            .await
    }

    pub async fn product(
        &self,
        id: &str,
        session: Option<&AppAuthSession>,
    ) -> Result<ProductDto, AppBackendError> {
        let path = format!("{}/{}", api_path::MASTER_PRODUCTS, id);
        self.ctx
            .request(path.as_str(), Method::GET, session, None)
            .await
    }

    pub async fn locations(
        &self,
        session: Option<&AppAuthSession>,
    ) -> Result<Vec<LocationDto>, AppBackendError> {
        self.ctx
            .request(api_path::MASTER_LOCATIONS, Method::GET, session, None)
            .await
    }

    pub async fn location(
        &self,
        id: &str,
        session: Option<&AppAuthSession>,
    ) -> Result<LocationDto, AppBackendError> {
        let path = format!("{}/{}", api_path::MASTER_LOCATIONS, id);
        self.ctx
            .request(path.as_str(), Method::GET, session, None)
            .await
    }

    pub async fn skus(
        &self,
        session: Option<&AppAuthSession>,
    ) -> Result<Vec<SkuDto>, AppBackendError> {
        self.ctx
            .request(api_path::MASTER_SKUS, Method::GET, session, None)
            .await
    }
}
