pub mod adapter;
pub mod api;
pub mod auth;
pub mod constant;
pub mod error;
pub mod model;
pub mod usecase;

use std::boxed::Box;
use std::result::Result;
use std::sync::Arc;

use wms_common::config::{AppCfgHardLimit, AppConfig};
use wms_common::logging::AppLogContext;

use crate::adapter::backend::{AppBackendContext, AppBackendError};
use crate::adapter::datasource::{app_txn_source, AbstractTransactionSource, AppTxnSourceArgs};
use crate::auth::AppAuthSession;
use crate::error::AppError;

pub fn hard_limit() -> AppCfgHardLimit {
    AppCfgHardLimit {
        max_mock_transactions: constant::hard_limit::MAX_MOCK_TRANSACTIONS,
        max_list_limit: constant::hard_limit::MAX_LIST_LIMIT,
    }
}

pub struct AppSharedState {
    _config: Arc<AppConfig>,
    _log_ctx: Arc<AppLogContext>,
    _backend: Arc<AppBackendContext>,
}

#[derive(Debug)]
pub enum ShrStateInitProgress {
    LogContext,
    Backend,
}

#[derive(Debug)]
pub struct ShrStateInitError {
    pub progress: ShrStateInitProgress,
    pub detail: String,
}
impl From<AppError> for ShrStateInitError {
    fn from(value: AppError) -> Self {
        Self {
            progress: ShrStateInitProgress::LogContext,
            detail: value.to_string(),
        }
    }
}
impl From<AppBackendError> for ShrStateInitError {
    fn from(value: AppBackendError) -> Self {
        Self {
            progress: ShrStateInitProgress::Backend,
            detail: value.to_string(),
        }
    }
}

impl AppSharedState {
    pub fn new(cfg: AppConfig) -> Result<Self, ShrStateInitError> {
        let logctx = {
            let lc = AppLogContext::new(&cfg.basepath, &cfg.dashboard.logging)
                .map_err(AppError::from)?;
            Arc::new(lc)
        };
        let _backend = {
            let b = AppBackendContext::try_build(&cfg.dashboard.backend, logctx.clone())?;
            Arc::new(b)
        };
        Ok(Self {
            _config: Arc::new(cfg),
            _log_ctx: logctx,
            _backend,
        })
    }

    pub fn backend(&self) -> Arc<AppBackendContext> {
        self._backend.clone()
    }
    pub fn log_context(&self) -> Arc<AppLogContext> {
        self._log_ctx.clone()
    }
    pub fn config(&self) -> Arc<AppConfig> {
        self._config.clone()
    }

    /// source selected by configuration, the session is only used by the
    /// backend source
    pub fn transaction_source<'s>(
        &self,
        session: Option<&'s AppAuthSession>,
    ) -> Box<dyn AbstractTransactionSource + 's> {
        let cfg = &self._config;
        app_txn_source(AppTxnSourceArgs {
            cfg: &cfg.dashboard.data_source,
            basepath: &cfg.basepath,
            backend: self._backend.clone(),
            list_limit: cfg.dashboard.backend.list_limit,
            session,
            logctx: self._log_ctx.clone(),
        })
    }
} // end of impl AppSharedState
