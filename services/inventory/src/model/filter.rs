use std::str::FromStr;

use chrono::NaiveDate;

use crate::constant::FILTER_MATCH_ALL;
use crate::error::AppError;

use super::{TransactionModel, TransactionStatus, TransactionType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TxnTypeFilter {
    #[default]
    All,
    Only(TransactionType),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TxnStatusFilter {
    #[default]
    All,
    Only(TransactionStatus),
}

impl FromStr for TxnTypeFilter {
    type Err = AppError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.eq_ignore_ascii_case(FILTER_MATCH_ALL) {
            Ok(Self::All)
        } else {
            TransactionType::from_str(s).map(Self::Only)
        }
    }
}
impl FromStr for TxnStatusFilter {
    type Err = AppError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.eq_ignore_ascii_case(FILTER_MATCH_ALL) {
            Ok(Self::All)
        } else {
            TransactionStatus::from_str(s).map(Self::Only)
        }
    }
}

/// Every active predicate has to match, an empty search term or `All`
/// variant or missing date bound leaves that dimension unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilterModel {
    pub search_term: String,
    pub type_: TxnTypeFilter,
    pub status: TxnStatusFilter,
    pub date_start: Option<NaiveDate>,
    pub date_end: Option<NaiveDate>,
}

struct PreparedFilter<'a> {
    term_lowercase: String,
    origin: &'a TransactionFilterModel,
}

impl<'a> PreparedFilter<'a> {
    fn new(origin: &'a TransactionFilterModel) -> Self {
        Self {
            term_lowercase: origin.search_term.to_lowercase(),
            origin,
        }
    }

    fn match_search(&self, txn: &TransactionModel) -> bool {
        let term = self.term_lowercase.as_str();
        term.is_empty()
            || [&txn.product, &txn.sku, &txn.id]
                .into_iter()
                .any(|field| field.to_lowercase().contains(term))
    }

    fn match_type(&self, txn: &TransactionModel) -> bool {
        match self.origin.type_ {
            TxnTypeFilter::All => true,
            TxnTypeFilter::Only(t) => txn.type_ == t,
        }
    }

    fn match_status(&self, txn: &TransactionModel) -> bool {
        match self.origin.status {
            TxnStatusFilter::All => true,
            TxnStatusFilter::Only(s) => txn.status == s,
        }
    }

    fn match_date(&self, txn: &TransactionModel) -> bool {
        let after_start = self.origin.date_start.map_or(true, |d| txn.date >= d);
        let before_end = self.origin.date_end.map_or(true, |d| txn.date <= d);
        after_start && before_end
    }

    fn matches(&self, txn: &TransactionModel) -> bool {
        self.match_search(txn)
            && self.match_type(txn)
            && self.match_status(txn)
            && self.match_date(txn)
    }
} // end of impl PreparedFilter

impl TransactionFilterModel {
    pub fn matches(&self, txn: &TransactionModel) -> bool {
        PreparedFilter::new(self).matches(txn)
    }

    /// keep the input order, this is not a sort
    pub fn apply(&self, txns: &[TransactionModel]) -> Vec<TransactionModel> {
        let prepared = PreparedFilter::new(self);
        txns.iter()
            .filter(|t| prepared.matches(t))
            .cloned()
            .collect()
    }

    pub fn is_unconstrained(&self) -> bool {
        self.search_term.is_empty()
            && self.type_ == TxnTypeFilter::All
            && self.status == TxnStatusFilter::All
            && self.date_start.is_none()
            && self.date_end.is_none()
    }
}
