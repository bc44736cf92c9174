use hyper::Method;

use super::{AppBackendContext, AppBackendError};
use crate::api::dto::{TenantInfoDto, TenantSettingsDto};
use crate::auth::AppAuthSession;
use crate::constant::api_path;

pub struct TenantApi<'a> {
    ctx: &'a AppBackendContext,
}

impl<'a> TenantApi<'a> {
    pub(super) fn new(ctx: &'a AppBackendContext) -> Self {
        Self { ctx }
    }

    pub async fn info(
        &self,
        session: Option<&AppAuthSession>,
    ) -> Result<TenantInfoDto, AppBackendError> {
        self.ctx
            .request(api_path::TENANT_INFO, Method::GET, session, None)
            .await
    }

    pub async fn settings(
        &self,
        session: Option<&AppAuthSession>,
    ) -> Result<TenantSettingsDto, AppBackendError> {
        self.ctx
            .request(api_path::TENANT_SETTINGS, Method::GET, session, None)
            .await
    }
}
