use hyper::Method;

use super::{serialize_body, AppBackendContext, AppBackendError, AppBackendErrorReason};
use crate::api::dto::{LoginReqDto, LoginRespDto, UserProfileDto};
use crate::auth::AppAuthSession;
use crate::constant::api_path;

pub struct UserApi<'a> {
    ctx: &'a AppBackendContext,
}

impl<'a> UserApi<'a> {
    pub(super) fn new(ctx: &'a AppBackendContext) -> Self {
        Self { ctx }
    }

    pub async fn login(&self, cred: &LoginReqDto) -> Result<AppAuthSession, AppBackendError> {
        let path = api_path::AUTH_LOGIN;
        let body = serialize_body(path, cred)?;
        let resp = self
            .ctx
            .request::<LoginRespDto>(path, Method::POST, None, Some(body))
            .await?;
        AppAuthSession::try_from(resp).map_err(|e| AppBackendError {
            reason: AppBackendErrorReason::Deserialise(e.to_string()),
            path: path.to_string(),
        })
    }

    /// the session is consumed whether or not the backend accepts it
    pub async fn logout(&self, session: AppAuthSession) -> Result<(), AppBackendError> {
        let _discarded = self
            .ctx
            .request_raw(api_path::AUTH_LOGOUT, Method::POST, Some(&session), None)
            .await?;
        Ok(())
    }

    pub async fn me(&self, session: &AppAuthSession) -> Result<UserProfileDto, AppBackendError> {
        self.ctx
            .request(api_path::USER_ME, Method::GET, Some(session), None)
            .await
    }
}
