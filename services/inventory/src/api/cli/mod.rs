mod render;

use std::str::FromStr;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

pub use self::render::{
    render_metrics, render_recent, render_remote_summary, render_stock, render_transactions,
};

use crate::api::dto::{LoginReqDto, TransactionCreateReqDto};
use crate::error::AppError;
use crate::model::{
    TransactionFilterModel, TransactionStatus, TransactionType, TxnStatusFilter, TxnTypeFilter,
};

#[derive(Debug, Parser)]
#[command(name = "dashboard", version, about = "Warehouse inventory dashboard")]
pub struct DashboardCli {
    /// login before running the command, logout afterwards
    #[arg(long, global = true, env = "WMS_USERNAME")]
    pub username: Option<String>,

    #[arg(long, global = true, env = "WMS_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    #[command(subcommand)]
    pub command: Option<DashboardCmd>,
}

#[derive(Debug, Subcommand)]
pub enum DashboardCmd {
    /// render the dashboard from the configured transaction source
    View(ViewArgs),
    /// combined fetch from the backend along with the stock metrics
    Remote,
    /// create a new inbound / outbound transaction in the backend
    Record(RecordArgs),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DashboardTab {
    #[default]
    Dashboard,
    Transactions,
    Stock,
}

#[derive(Debug, Clone, Default, Args)]
pub struct ViewArgs {
    /// case-insensitive match on product, SKU or transaction ID
    #[arg(long, default_value = "")]
    pub search: String,

    /// INBOUND, OUTBOUND or ALL
    #[arg(long = "type", default_value = "ALL")]
    pub type_: String,

    /// Completed, Pending, Processing or ALL
    #[arg(long, default_value = "ALL")]
    pub status: String,

    #[arg(long)]
    pub date_start: Option<NaiveDate>,

    #[arg(long)]
    pub date_end: Option<NaiveDate>,

    #[arg(long, value_enum, default_value_t = DashboardTab::Dashboard)]
    pub tab: DashboardTab,
}

#[derive(Debug, Clone, Args)]
pub struct RecordArgs {
    #[arg(long = "type")]
    pub type_: String,
    #[arg(long)]
    pub product: String,
    #[arg(long)]
    pub sku: String,
    #[arg(long)]
    pub quantity: u32,
    #[arg(long)]
    pub location: String,
    /// defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub reference: Option<String>,
}

impl DashboardCli {
    pub fn credential(&self) -> Option<LoginReqDto> {
        match (&self.username, &self.password) {
            (Some(u), Some(p)) => Some(LoginReqDto {
                username: u.clone(),
                password: p.clone(),
            }),
            _others => None,
        }
    }
}

impl TryFrom<&ViewArgs> for TransactionFilterModel {
    type Error = AppError;
    fn try_from(value: &ViewArgs) -> Result<Self, Self::Error> {
        Ok(Self {
            search_term: value.search.clone(),
            type_: TxnTypeFilter::from_str(value.type_.as_str())?,
            status: TxnStatusFilter::from_str(value.status.as_str())?,
            date_start: value.date_start,
            date_end: value.date_end,
        })
    }
}

impl RecordArgs {
    pub fn into_request(
        self,
        today: NaiveDate,
    ) -> Result<(TransactionType, TransactionCreateReqDto), AppError> {
        let direction = TransactionType::from_str(self.type_.as_str())?;
        let status = self
            .status
            .as_deref()
            .map(TransactionStatus::from_str)
            .transpose()?
            .map(Into::into);
        let req = TransactionCreateReqDto {
            product: self.product,
            sku: self.sku,
            quantity: self.quantity,
            location: self.location,
            date: self.date.unwrap_or(today),
            status,
            reference: self.reference,
        };
        Ok((direction, req))
    }
}
