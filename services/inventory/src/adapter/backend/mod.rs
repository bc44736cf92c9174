mod base_client;
mod master;
mod stock;
mod tenant;
mod transaction;
mod user;

use std::fmt::{Display, Formatter};
use std::result::Result;
use std::sync::Arc;

use hyper::header::{HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use hyper::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_native_tls::{native_tls, TlsConnector};

use wms_common::config::AppBackendCfg;
use wms_common::constant::HTTP_CONTENT_TYPE_JSON;
use wms_common::logging::{app_log_event, AppLogContext, AppLogLevel};

use self::base_client::BaseClient;
pub use self::base_client::{BaseClientError, BaseClientErrorReason};
pub use self::master::MasterDataApi;
pub use self::stock::StockTaskApi;
pub use self::tenant::TenantApi;
pub use self::transaction::TransactionApi;
pub use self::user::UserApi;

use crate::auth::AppAuthSession;
use crate::error::{AppError, AppErrorCode};
use crate::model::TransactionType;

#[derive(Debug)]
pub enum AppBackendErrorReason {
    LowLvlNet(BaseClientError),
    // status code and its canonical text
    HttpStatus(u16, String),
    Serialise(String),
    Deserialise(String),
    InvalidHeader(String),
}

#[derive(Debug)]
pub struct AppBackendError {
    pub reason: AppBackendErrorReason,
    pub path: String,
}

impl AppBackendError {
    pub fn status(&self) -> Option<u16> {
        if let AppBackendErrorReason::HttpStatus(code, _) = &self.reason {
            Some(*code)
        } else {
            None
        }
    }
}

impl Display for AppBackendError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.reason {
            AppBackendErrorReason::HttpStatus(code, text) => {
                write!(f, "API Error: {} {}", code, text)
            }
            others => write!(f, "API Error: path:{}, {:?}", self.path, others),
        }
    }
}

impl From<AppBackendError> for AppError {
    fn from(value: AppBackendError) -> Self {
        AppError {
            code: AppErrorCode::RemoteRequestFailure,
            detail: Some(value.to_string()),
        }
    }
}

/// Entry point to the warehouse-management backend. Each request opens a
/// fresh connection, the context only keeps what is needed to open one.
pub struct AppBackendContext {
    host: String,
    port: u16,
    secure_connector: Option<TlsConnector>,
    logctx: Arc<AppLogContext>,
}

impl AppBackendContext {
    pub fn try_build(
        cfg: &AppBackendCfg,
        logctx: Arc<AppLogContext>,
    ) -> Result<Self, AppBackendError> {
        let secure_connector = if cfg.secure {
            let mut builder = native_tls::TlsConnector::builder();
            builder.min_protocol_version(Some(native_tls::Protocol::Tlsv12));
            let c = builder.build().map_err(|e| AppBackendError {
                reason: AppBackendErrorReason::LowLvlNet(BaseClientError { reason: e.into() }),
                path: String::new(),
            })?;
            Some(TlsConnector::from(c))
        } else {
            None
        };
        Ok(Self {
            host: cfg.host.clone(),
            port: cfg.port,
            secure_connector,
            logctx,
        })
    }

    pub fn inbound(&self) -> TransactionApi<'_> {
        TransactionApi::new(self, TransactionType::Inbound)
    }
    pub fn outbound(&self) -> TransactionApi<'_> {
        TransactionApi::new(self, TransactionType::Outbound)
    }
    pub fn master(&self) -> MasterDataApi<'_> {
        MasterDataApi::new(self)
    }
    pub fn stock(&self) -> StockTaskApi<'_> {
        StockTaskApi::new(self)
    }
    pub fn user(&self) -> UserApi<'_> {
        UserApi::new(self)
    }
    pub fn tenant(&self) -> TenantApi<'_> {
        TenantApi::new(self)
    }

    fn headers(
        &self,
        path: &str,
        session: Option<&AppAuthSession>,
    ) -> Result<Vec<(HeaderName, HeaderValue)>, AppBackendError> {
        let mut out = vec![(
            CONTENT_TYPE,
            HeaderValue::from_static(HTTP_CONTENT_TYPE_JSON),
        )];
        if let Some(sess) = session {
            let v = sess.bearer_header().map_err(|e| AppBackendError {
                reason: AppBackendErrorReason::InvalidHeader(e.detail.unwrap_or_default()),
                path: path.to_string(),
            })?;
            out.push((AUTHORIZATION, v));
        }
        Ok(out)
    }

    /// perform one request, non-success status becomes an error and the
    /// response body is dropped in that case
    pub(crate) async fn request_raw(
        &self,
        path: &str,
        method: Method,
        session: Option<&AppAuthSession>,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, AppBackendError> {
        let logctx = &self.logctx;
        let headers = self.headers(path, session)?;
        let result = async {
            let mut client = BaseClient::try_build(
                logctx.clone(),
                self.secure_connector.as_ref(),
                self.host.clone(),
                self.port,
            )
            .await?;
            client.execute(path, method.clone(), headers, body).await
        }
        .await;
        let (raw, status) = result.map_err(|e| {
            app_log_event!(
                logctx,
                AppLogLevel::ERROR,
                "method:{}, path:{}, reason:{:?}",
                method.as_str(),
                path,
                &e.reason
            );
            AppBackendError {
                reason: AppBackendErrorReason::LowLvlNet(e),
                path: path.to_string(),
            }
        })?;
        if status.is_success() {
            app_log_event!(
                logctx,
                AppLogLevel::DEBUG,
                "method:{}, path:{}, status:{}, nbytes:{}",
                method.as_str(),
                path,
                status.as_u16(),
                raw.len()
            );
            Ok(raw)
        } else {
            let e = Self::status_error(path, status);
            app_log_event!(logctx, AppLogLevel::ERROR, "path:{}, {}", path, &e);
            Err(e)
        }
    } // end of fn request_raw

    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        method: Method,
        session: Option<&AppAuthSession>,
        body: Option<Vec<u8>>,
    ) -> Result<T, AppBackendError> {
        let raw = self.request_raw(path, method, session, body).await?;
        serde_json::from_slice::<T>(raw.as_slice()).map_err(|e| {
            let logctx = &self.logctx;
            app_log_event!(
                logctx,
                AppLogLevel::ERROR,
                "path:{}, decode-failure:{}",
                path,
                &e
            );
            AppBackendError {
                reason: AppBackendErrorReason::Deserialise(e.to_string()),
                path: path.to_string(),
            }
        })
    }

    fn status_error(path: &str, status: StatusCode) -> AppBackendError {
        let text = status.canonical_reason().unwrap_or_default().to_string();
        AppBackendError {
            reason: AppBackendErrorReason::HttpStatus(status.as_u16(), text),
            path: path.to_string(),
        }
    }
} // end of impl AppBackendContext

pub(crate) fn serialize_body<S: Serialize>(path: &str, obj: &S) -> Result<Vec<u8>, AppBackendError> {
    serde_json::to_vec(obj).map_err(|e| AppBackendError {
        reason: AppBackendErrorReason::Serialise(e.to_string()),
        path: path.to_string(),
    })
}

/// returns `?<query>`, or empty string when nothing to encode
pub(crate) fn query_suffix<Q: Serialize>(path: &str, query: &Q) -> Result<String, AppBackendError> {
    let encoded = serde_qs::to_string(query).map_err(|e| AppBackendError {
        reason: AppBackendErrorReason::Serialise(e.to_string()),
        path: path.to_string(),
    })?;
    if encoded.is_empty() {
        Ok(String::new())
    } else {
        Ok(format!("?{encoded}"))
    }
}
