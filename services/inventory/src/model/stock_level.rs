use std::collections::HashMap;

use super::TransactionModel;

/// grouping key of the stock level, kept as separate fields so that
/// names containing delimiter-like text never collide
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StockKey {
    pub product: String,
    pub sku: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockEntryModel {
    pub key: StockKey,
    pub quantity: i64,
    // location of the first transaction seen for the key
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StockLevelModelSet {
    pub entries: Vec<StockEntryModel>,
}

impl From<&TransactionModel> for StockKey {
    fn from(value: &TransactionModel) -> Self {
        Self {
            product: value.product.clone(),
            sku: value.sku.clone(),
        }
    }
}

impl StockLevelModelSet {
    /// Derive current on-hand quantity per product / SKU from a transaction
    /// log. Transactions are replayed in the given order, entries keep the
    /// order in which their key first appeared, and only entries with a
    /// positive net quantity are returned.
    pub fn from_transactions<'a, I>(txns: I) -> Self
    where
        I: IntoIterator<Item = &'a TransactionModel>,
    {
        let mut positions: HashMap<StockKey, usize> = HashMap::new();
        let mut entries: Vec<StockEntryModel> = Vec::new();
        for txn in txns {
            let pos = *positions
                .entry(StockKey::from(txn))
                .or_insert_with_key(|key| {
                    entries.push(StockEntryModel {
                        key: key.clone(),
                        quantity: 0,
                        location: txn.location.clone(),
                    });
                    entries.len() - 1
                });
            if let Some(delta) = txn.stock_delta() {
                entries[pos].quantity += delta;
            }
        } // negative running totals are allowed during the fold
        entries.retain(|e| e.quantity > 0);
        Self { entries }
    }

    pub fn total_quantity(&self) -> i64 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, product: &str, sku: &str) -> Option<&StockEntryModel> {
        self.entries
            .iter()
            .find(|e| e.key.product == product && e.key.sku == sku)
    }
} // end of impl StockLevelModelSet
