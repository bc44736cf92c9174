use std::result::Result;

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::AbstractTransactionSource;
use crate::constant::mock_data;
use crate::error::AppError;
use crate::model::{TransactionModel, TransactionStatus, TransactionType};

const ALL_STATUS: [TransactionStatus; 3] = [
    TransactionStatus::Completed,
    TransactionStatus::Pending,
    TransactionStatus::Processing,
];

/// Random transactions spread over the last days before `today`, the
/// same seed always yields the same sequence.
pub struct MockTransactionSource {
    num: u32,
    seed: Option<u64>,
    today: NaiveDate,
}

impl MockTransactionSource {
    pub fn new(num: u32, seed: Option<u64>, today: NaiveDate) -> Self {
        Self { num, seed, today }
    }

    pub fn generate(&self) -> Vec<TransactionModel> {
        let mut rng = match self.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        (1..=self.num)
            .map(|serial| self.generate_one(&mut rng, serial))
            .collect()
    }

    fn generate_one(&self, rng: &mut StdRng, serial: u32) -> TransactionModel {
        let product = mock_data::PRODUCTS[rng.gen_range(0..mock_data::PRODUCTS.len())];
        let sku = format!("SKU-{}", rng.gen_range(0..mock_data::MAX_SKU_SERIAL));
        let type_ = if rng.gen_bool(0.5) {
            TransactionType::Inbound
        } else {
            TransactionType::Outbound
        };
        let quantity = rng.gen_range(1..=mock_data::MAX_QUANTITY);
        let location = mock_data::LOCATIONS[rng.gen_range(0..mock_data::LOCATIONS.len())];
        let days_ago = rng.gen_range(0..mock_data::NUM_DAYS_HISTORY);
        let status = ALL_STATUS[rng.gen_range(0..ALL_STATUS.len())];
        let reference = format!("REF-{}", rng.gen_range(0..mock_data::MAX_REF_SERIAL));
        TransactionModel {
            id: format!("TXN-{:05}", serial),
            product: product.to_string(),
            sku,
            type_,
            quantity,
            location: location.to_string(),
            date: self.today - Duration::days(days_ago),
            status,
            reference,
        }
    }
}

#[async_trait]
impl AbstractTransactionSource for MockTransactionSource {
    async fn fetch(&self) -> Result<Vec<TransactionModel>, AppError> {
        Ok(self.generate())
    }

    fn label(&self) -> &'static str {
        "mock"
    }
}
