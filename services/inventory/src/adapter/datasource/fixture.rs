use std::fs::File;
use std::io::BufReader;
use std::result::Result;
use std::sync::Arc;

use async_trait::async_trait;

use wms_common::logging::{app_log_event, AppLogContext, AppLogLevel};

use super::AbstractTransactionSource;
use crate::api::dto::TransactionDto;
use crate::error::{AppError, AppErrorCode};
use crate::model::{try_collect_transactions, TransactionModel};

pub struct FixtureTransactionSource {
    path: String,
    logctx: Arc<AppLogContext>,
}

impl FixtureTransactionSource {
    pub fn new(path: String, logctx: Arc<AppLogContext>) -> Self {
        Self { path, logctx }
    }

    fn load(&self) -> Result<Vec<TransactionDto>, AppError> {
        let fileobj = File::open(self.path.as_str()).map_err(|e| AppError {
            code: AppErrorCode::IOerror(e.kind()),
            detail: Some(format!("{}, {}", self.path, e)),
        })?;
        let reader = BufReader::new(fileobj);
        serde_json::from_reader::<_, Vec<TransactionDto>>(reader).map_err(|e| AppError {
            code: AppErrorCode::InvalidJsonFormat,
            detail: Some(e.to_string()),
        })
    }
}

#[async_trait]
impl AbstractTransactionSource for FixtureTransactionSource {
    async fn fetch(&self) -> Result<Vec<TransactionModel>, AppError> {
        let logctx = &self.logctx;
        let result = self.load().and_then(try_collect_transactions);
        match &result {
            Ok(txns) => app_log_event!(
                logctx,
                AppLogLevel::DEBUG,
                "path:{}, loaded:{}",
                self.path,
                txns.len()
            ),
            Err(e) => app_log_event!(logctx, AppLogLevel::ERROR, "path:{}, {}", self.path, e),
        }
        result
    }

    fn label(&self) -> &'static str {
        "fixture"
    }
}
