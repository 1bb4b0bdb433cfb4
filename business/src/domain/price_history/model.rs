use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::shared::value_objects::{PriceEntryId, Unit};

/// Most recent entries returned by a product's price history.
pub const HISTORY_LIMIT: u32 = 50;
/// Most recent entries that feed the average price.
pub const AVERAGE_WINDOW: u32 = 10;
/// Most product names returned by an autocomplete lookup.
pub const SIMILAR_PRODUCTS_LIMIT: u32 = 10;

/// One observed unit price. Entries are append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistoryEntry {
    pub id: Option<PriceEntryId>,
    pub product_name: String,
    pub price: BigDecimal,
    pub unit: Unit,
    pub recorded_at: DateTime<Utc>,
    pub location: Option<String>,
}

impl PriceHistoryEntry {
    pub fn new(product_name: String, price: BigDecimal, unit: Unit, location: Option<String>) -> Self {
        Self::recorded_at(product_name, price, unit, location, Utc::now())
    }

    pub fn recorded_at(
        product_name: String,
        price: BigDecimal,
        unit: Unit,
        location: Option<String>,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            product_name,
            price,
            unit,
            recorded_at,
            location,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: PriceEntryId,
        product_name: String,
        price: BigDecimal,
        unit: Unit,
        recorded_at: DateTime<Utc>,
        location: Option<String>,
    ) -> Self {
        Self {
            id: Some(id),
            product_name,
            price,
            unit,
            recorded_at,
            location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::money::cents;

    #[test]
    fn should_create_unpersisted_entry_recorded_now() {
        let before = Utc::now();
        let entry = PriceHistoryEntry::new("rice".to_string(), cents(650), Unit::Kilogram, None);

        assert!(entry.id.is_none());
        assert!(entry.recorded_at >= before);
        assert_eq!(entry.price, cents(650));
        assert!(entry.location.is_none());
    }
}
