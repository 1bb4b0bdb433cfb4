use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use super::errors::ItemError;
use crate::domain::catalog::model::CatalogEntry;
use crate::domain::price_history::model::PriceHistoryEntry;
use crate::domain::shared::value_objects::{
    Category, DEFAULT_ICON, ItemId, ListId, MAX_NAME_LENGTH, Unit,
};

const MAX_ICON_LENGTH: usize = 10;

/// A product line within a shopping list. Always owned by exactly one list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: Option<ItemId>,
    pub name: String,
    pub icon: String,
    pub unit: Unit,
    pub unit_price: BigDecimal,
    pub quantity: BigDecimal,
    pub manual_total: Option<BigDecimal>,
    pub category: Category,
    pub purchased: bool,
    pub list_id: ListId,
    pub created_at: DateTime<Utc>,
}

pub struct NewItemProps {
    pub list_id: ListId,
    pub name: String,
    pub icon: Option<String>,
    pub unit: Unit,
    pub unit_price: BigDecimal,
    /// Defaults to 1.
    pub quantity: Option<BigDecimal>,
    pub manual_total: Option<BigDecimal>,
    pub category: Category,
}

impl Item {
    pub fn new(props: NewItemProps) -> Result<Self, ItemError> {
        let icon = props
            .icon
            .filter(|icon| !icon.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ICON.to_string());

        let item = Self {
            id: None,
            name: props.name,
            icon,
            unit: props.unit,
            unit_price: props.unit_price,
            quantity: props.quantity.unwrap_or_else(BigDecimal::one),
            manual_total: props.manual_total,
            category: props.category,
            purchased: false,
            list_id: props.list_id,
            created_at: Utc::now(),
        };
        item.validate()?;
        Ok(item)
    }

    /// Builds an item pre-filled from a catalog entry, quantity 1.
    pub fn from_catalog(list_id: ListId, entry: &CatalogEntry) -> Self {
        Self {
            id: None,
            name: entry.name.clone(),
            icon: entry.icon.clone(),
            unit: entry.unit,
            unit_price: entry.reference_price.clone(),
            quantity: BigDecimal::one(),
            manual_total: None,
            category: entry.category,
            purchased: false,
            list_id,
            created_at: Utc::now(),
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: ItemId,
        name: String,
        icon: String,
        unit: Unit,
        unit_price: BigDecimal,
        quantity: BigDecimal,
        manual_total: Option<BigDecimal>,
        category: Category,
        purchased: bool,
        list_id: ListId,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            icon,
            unit,
            unit_price,
            quantity,
            manual_total,
            category,
            purchased,
            list_id,
            created_at,
        }
    }

    /// The manual total when one was entered, otherwise unit price times quantity.
    pub fn total(&self) -> BigDecimal {
        match &self.manual_total {
            Some(total) => total.clone(),
            None => &self.unit_price * &self.quantity,
        }
    }

    pub fn validate(&self) -> Result<(), ItemError> {
        if self.name.trim().is_empty() {
            return Err(ItemError::NameEmpty);
        }
        if self.name.chars().count() > MAX_NAME_LENGTH {
            return Err(ItemError::NameTooLong);
        }
        if self.icon.chars().count() > MAX_ICON_LENGTH {
            return Err(ItemError::IconTooLong);
        }
        if self.unit_price < BigDecimal::zero() {
            return Err(ItemError::NegativePrice);
        }
        if self.quantity <= BigDecimal::zero() {
            return Err(ItemError::NonPositiveQuantity);
        }
        if let Some(total) = &self.manual_total
            && *total < BigDecimal::zero()
        {
            return Err(ItemError::NegativeManualTotal);
        }
        Ok(())
    }

    /// The price history entry that saving this item records, if any.
    ///
    /// Only a positive unit price is an observation worth keeping.
    pub fn price_observation(&self) -> Option<PriceHistoryEntry> {
        if self.unit_price <= BigDecimal::zero() {
            return None;
        }
        Some(PriceHistoryEntry::new(
            self.name.clone(),
            self.unit_price.clone(),
            self.unit,
            None,
        ))
    }
}
