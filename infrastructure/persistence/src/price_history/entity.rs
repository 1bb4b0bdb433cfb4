use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::errors::RepositoryError;
use business::domain::price_history::model::PriceHistoryEntry;
use business::domain::shared::value_objects::{PriceEntryId, Unit};

use crate::error::decimal;

#[derive(Debug, FromRow)]
pub struct PriceHistoryEntity {
    pub id: i64,
    pub product_name: String,
    pub price: String,
    pub unit: i64,
    pub recorded_at: DateTime<Utc>,
    pub location: Option<String>,
}

impl PriceHistoryEntity {
    pub fn into_domain(self) -> Result<PriceHistoryEntry, RepositoryError> {
        Ok(PriceHistoryEntry::from_repository(
            PriceEntryId::new(self.id),
            self.product_name,
            decimal("price", &self.price)?,
            Unit::from(self.unit),
            self.recorded_at,
            self.location,
        ))
    }
}
