use std::result::Result;
use std::sync::Arc;

use crate::adapter::backend::{AppBackendContext, AppBackendError, TransactionApi};
use crate::api::dto::{TransactionCreateReqDto, TransactionUpdateReqDto};
use crate::auth::AppAuthSession;
use crate::error::AppError;
use crate::model::{TransactionModel, TransactionType};

#[derive(Debug)]
pub enum EditTransactionUcError {
    // quantity has to be positive before anything is sent
    InvalidQuantity,
    Backend(AppBackendError),
    // the backend replied with a transaction that cannot be ingested
    CorruptedReply(AppError),
}

impl From<AppBackendError> for EditTransactionUcError {
    fn from(value: AppBackendError) -> Self {
        Self::Backend(value)
    }
}

pub struct EditTransactionUseCase<'a> {
    pub backend: Arc<AppBackendContext>,
    pub session: Option<&'a AppAuthSession>,
}

impl<'a> EditTransactionUseCase<'a> {
    fn api(&self, direction: TransactionType) -> TransactionApi<'_> {
        match direction {
            TransactionType::Inbound => self.backend.inbound(),
            TransactionType::Outbound => self.backend.outbound(),
        }
    }

    pub async fn create(
        &self,
        direction: TransactionType,
        req: TransactionCreateReqDto,
    ) -> Result<TransactionModel, EditTransactionUcError> {
        if req.quantity == 0 {
            return Err(EditTransactionUcError::InvalidQuantity);
        }
        let saved = self
            .api(direction)
            .create(&req, self.session)
            .await?;
        TransactionModel::try_from(saved).map_err(EditTransactionUcError::CorruptedReply)
    }

    pub async fn update(
        &self,
        direction: TransactionType,
        id: &str,
        req: TransactionUpdateReqDto,
    ) -> Result<TransactionModel, EditTransactionUcError> {
        if req.quantity == Some(0) {
            return Err(EditTransactionUcError::InvalidQuantity);
        }
        let saved = self
            .api(direction)
            .update(id, &req, self.session)
            .await?;
        TransactionModel::try_from(saved).map_err(EditTransactionUcError::CorruptedReply)
    }
}
