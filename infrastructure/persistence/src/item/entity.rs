use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::errors::RepositoryError;
use business::domain::item::model::Item;
use business::domain::shared::value_objects::{Category, ItemId, ListId, Unit};

use crate::error::decimal;

pub(crate) const ITEM_COLUMNS: &str = "id, name, icon, unit, unit_price, quantity, manual_total, category, purchased, list_id, created_at";

#[derive(Debug, FromRow)]
pub struct ItemEntity {
    pub id: i64,
    pub name: String,
    pub icon: String,
    pub unit: i64,
    pub unit_price: String,
    pub quantity: String,
    pub manual_total: Option<String>,
    pub category: i64,
    pub purchased: bool,
    pub list_id: i64,
    pub created_at: DateTime<Utc>,
}

impl ItemEntity {
    pub fn into_domain(self) -> Result<Item, RepositoryError> {
        let manual_total = self
            .manual_total
            .as_deref()
            .map(|total| decimal("manual_total", total))
            .transpose()?;

        Ok(Item::from_repository(
            ItemId::new(self.id),
            self.name,
            self.icon,
            Unit::from(self.unit),
            decimal("unit_price", &self.unit_price)?,
            decimal("quantity", &self.quantity)?,
            manual_total,
            Category::from(self.category),
            self.purchased,
            ListId::new(self.list_id),
            self.created_at,
        ))
    }
}

/// Converts fetched rows, failing on the first corrupt one.
pub(crate) fn into_items(entities: Vec<ItemEntity>) -> Result<Vec<Item>, RepositoryError> {
    entities.into_iter().map(ItemEntity::into_domain).collect()
}
