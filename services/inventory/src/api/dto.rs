use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[allow(clippy::upper_case_acronyms)]
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionTypeDto {
    INBOUND,
    OUTBOUND,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatusDto {
    Completed,
    Pending,
    Processing,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct TransactionDto {
    pub id: String,
    pub product: String,
    pub sku: String,
    #[serde(rename = "type")]
    pub type_: TransactionTypeDto,
    // kept signed, positive check happens when converting to model
    pub quantity: i64,
    pub location: String,
    pub date: NaiveDate,
    pub status: TransactionStatusDto,
    #[serde(default)]
    pub reference: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct TransactionCreateReqDto {
    pub product: String,
    pub sku: String,
    pub quantity: u32,
    pub location: String,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatusDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct TransactionUpdateReqDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatusDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

#[derive(Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct TransactionListQueryDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatusDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_start: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_end: Option<NaiveDate>,
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct ProductListQueryDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LocationDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub kind: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SkuDto {
    pub code: String,
    #[serde(default)]
    pub product_id: Option<String>,
}

#[derive(Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct StockQueryDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct StockLevelDto {
    pub product: String,
    pub sku: String,
    pub quantity: i64,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct TaskQueryDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct TaskDto {
    pub id: String,
    pub title: String,
    pub status: String,
    #[serde(default)]
    pub assignee: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct UserProfileDto {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LoginReqDto {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LoginRespDto {
    pub token: String,
    #[serde(default)]
    pub user: Option<UserProfileDto>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct TenantInfoDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub plan: Option<String>,
}

// free-form, each tenant may carry different settings
pub type TenantSettingsDto = HashMap<String, serde_json::Value>;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct DashboardDataDto {
    pub inbound: Vec<TransactionDto>,
    pub outbound: Vec<TransactionDto>,
    pub products: Vec<ProductDto>,
    pub stock: Vec<StockLevelDto>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockMetricsDto {
    pub total_stock: i64,
    pub unique_products: usize,
    pub low_stock_items: usize,
}
