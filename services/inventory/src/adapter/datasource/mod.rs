mod backend;
mod fixture;
mod mock;

use std::boxed::Box;
use std::marker::{Send, Sync};
use std::result::Result;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Local;

use wms_common::config::{AppBasepathCfg, AppDataSourceCfg};
use wms_common::logging::{app_log_event, AppLogContext, AppLogLevel};

pub use self::backend::BackendTransactionSource;
pub use self::fixture::FixtureTransactionSource;
pub use self::mock::MockTransactionSource;

use super::backend::AppBackendContext;
use crate::auth::AppAuthSession;
use crate::error::AppError;
use crate::model::TransactionModel;

/// Where the dashboard reads its transactions from. Every implementation
/// returns the sequence in the order the dashboard should display it.
#[async_trait]
pub trait AbstractTransactionSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<TransactionModel>, AppError>;

    fn label(&self) -> &'static str;
}

pub struct AppTxnSourceArgs<'a, 's> {
    pub cfg: &'a AppDataSourceCfg,
    pub basepath: &'a AppBasepathCfg,
    pub backend: Arc<AppBackendContext>,
    pub list_limit: u32,
    // borrowed, the caller keeps ownership until logout
    pub session: Option<&'s AppAuthSession>,
    pub logctx: Arc<AppLogContext>,
}

pub fn app_txn_source<'s>(args: AppTxnSourceArgs<'_, 's>) -> Box<dyn AbstractTransactionSource + 's> {
    let AppTxnSourceArgs {
        cfg,
        basepath,
        backend,
        list_limit,
        session,
        logctx,
    } = args;
    let obj: Box<dyn AbstractTransactionSource + 's> = match cfg {
        AppDataSourceCfg::Mock {
            num_transactions,
            seed,
        } => {
            let today = Local::now().date_naive();
            Box::new(MockTransactionSource::new(*num_transactions, *seed, today))
        }
        AppDataSourceCfg::Fixture { path } => {
            let fullpath = basepath.service.clone() + path.as_str();
            Box::new(FixtureTransactionSource::new(fullpath, logctx.clone()))
        }
        AppDataSourceCfg::Backend => Box::new(BackendTransactionSource::new(
            backend, list_limit, session,
        )),
    };
    app_log_event!(
        logctx,
        AppLogLevel::DEBUG,
        "transaction source: {}",
        obj.label()
    );
    obj
}
