use std::str::FromStr;

use chrono::NaiveDate;

use crate::api::dto::{TransactionDto, TransactionStatusDto, TransactionTypeDto};
use crate::error::{AppError, AppErrorCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    Inbound,
    Outbound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionStatus {
    Completed,
    Pending,
    Processing,
}

/// One inventory movement. Direction of the stock change is carried by
/// `type_`, the quantity is always positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionModel {
    pub id: String,
    pub product: String,
    pub sku: String,
    pub type_: TransactionType,
    pub quantity: u32,
    pub location: String,
    pub date: NaiveDate,
    pub status: TransactionStatus,
    pub reference: String,
}

impl From<TransactionTypeDto> for TransactionType {
    fn from(value: TransactionTypeDto) -> Self {
        match value {
            TransactionTypeDto::INBOUND => Self::Inbound,
            TransactionTypeDto::OUTBOUND => Self::Outbound,
        }
    }
}
impl From<TransactionType> for TransactionTypeDto {
    fn from(value: TransactionType) -> Self {
        match value {
            TransactionType::Inbound => Self::INBOUND,
            TransactionType::Outbound => Self::OUTBOUND,
        }
    }
}
impl From<TransactionStatusDto> for TransactionStatus {
    fn from(value: TransactionStatusDto) -> Self {
        match value {
            TransactionStatusDto::Completed => Self::Completed,
            TransactionStatusDto::Pending => Self::Pending,
            TransactionStatusDto::Processing => Self::Processing,
        }
    }
}
impl From<TransactionStatus> for TransactionStatusDto {
    fn from(value: TransactionStatus) -> Self {
        match value {
            TransactionStatus::Completed => Self::Completed,
            TransactionStatus::Pending => Self::Pending,
            TransactionStatus::Processing => Self::Processing,
        }
    }
}

impl TransactionType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Inbound => "INBOUND",
            Self::Outbound => "OUTBOUND",
        }
    }
}
impl TransactionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Pending => "Pending",
            Self::Processing => "Processing",
        }
    }
}

impl FromStr for TransactionType {
    type Err = AppError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INBOUND" => Ok(Self::Inbound),
            "OUTBOUND" => Ok(Self::Outbound),
            _others => Err(AppError {
                code: AppErrorCode::InvalidInput,
                detail: Some(format!("txn-type:{s}")),
            }),
        }
    }
}
impl FromStr for TransactionStatus {
    type Err = AppError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "completed" => Ok(Self::Completed),
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            _others => Err(AppError {
                code: AppErrorCode::InvalidInput,
                detail: Some(format!("txn-status:{s}")),
            }),
        }
    }
}

impl TransactionModel {
    /// signed change this transaction applies to the stock level, only
    /// completed transactions contribute
    pub fn stock_delta(&self) -> Option<i64> {
        let qty = self.quantity as i64;
        match (self.type_, self.status) {
            (TransactionType::Inbound, TransactionStatus::Completed) => Some(qty),
            (TransactionType::Outbound, TransactionStatus::Completed) => Some(-qty),
            _others => None,
        }
    }

    pub fn is_completed(&self, type_: TransactionType) -> bool {
        self.type_ == type_ && self.status == TransactionStatus::Completed
    }
}

impl TryFrom<TransactionDto> for TransactionModel {
    type Error = AppError;
    fn try_from(value: TransactionDto) -> Result<Self, Self::Error> {
        let TransactionDto {
            id,
            product,
            sku,
            type_,
            quantity,
            location,
            date,
            status,
            reference,
        } = value;
        let quantity = u32::try_from(quantity)
            .ok()
            .filter(|q| *q > 0)
            .ok_or(AppError {
                code: AppErrorCode::InvalidInput,
                detail: Some(format!("txn-quantity, id:{id}, given:{quantity}")),
            })?;
        Ok(Self {
            id,
            product,
            sku,
            type_: type_.into(),
            quantity,
            location,
            date,
            status: status.into(),
            reference,
        })
    }
} // end of impl TransactionModel

impl From<TransactionModel> for TransactionDto {
    fn from(value: TransactionModel) -> Self {
        Self {
            id: value.id,
            product: value.product,
            sku: value.sku,
            type_: value.type_.into(),
            quantity: value.quantity as i64,
            location: value.location,
            date: value.date,
            status: value.status.into(),
            reference: value.reference,
        }
    }
}

pub fn try_collect_transactions(
    raw: Vec<TransactionDto>,
) -> Result<Vec<TransactionModel>, AppError> {
    raw.into_iter().map(TransactionModel::try_from).collect()
}
