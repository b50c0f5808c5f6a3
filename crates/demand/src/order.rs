use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use stockcast_core::ProductId;

/// A single historical order line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub product: ProductId,
    pub ordered_at: NaiveDateTime,
    pub quantity: u64,
}

impl OrderRecord {
    pub fn new(product: ProductId, ordered_at: NaiveDateTime, quantity: u64) -> Self {
        Self {
            product,
            ordered_at,
            quantity,
        }
    }

    pub fn order_date(&self) -> NaiveDate {
        self.ordered_at.date()
    }
}
