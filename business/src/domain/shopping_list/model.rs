use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use super::errors::ShoppingListError;
use crate::domain::item::model::Item;
use crate::domain::shared::money;
use crate::domain::shared::value_objects::{ListId, MAX_NAME_LENGTH};

/// Name of the list the application keeps around for quick additions.
pub const DEFAULT_LIST_NAME: &str = "Default List";

/// A shopping list record. Its items are owned by the store and loaded
/// separately; see [`ShoppingListDetails`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
    pub id: Option<ListId>,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub purchased_at: Option<DateTime<Utc>>,
    pub finalized: bool,
    pub budget: BigDecimal,
}

impl ShoppingList {
    pub fn new(name: String, budget: BigDecimal) -> Result<Self, ShoppingListError> {
        let list = Self {
            id: None,
            name,
            created_at: Utc::now(),
            purchased_at: None,
            finalized: false,
            budget,
        };
        list.validate()?;
        Ok(list)
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: ListId,
        name: String,
        created_at: DateTime<Utc>,
        purchased_at: Option<DateTime<Utc>>,
        finalized: bool,
        budget: BigDecimal,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            created_at,
            purchased_at,
            finalized,
            budget,
        }
    }

    pub fn validate(&self) -> Result<(), ShoppingListError> {
        if self.name.trim().is_empty() {
            return Err(ShoppingListError::NameEmpty);
        }
        if self.name.chars().count() > MAX_NAME_LENGTH {
            return Err(ShoppingListError::NameTooLong);
        }
        if self.budget < BigDecimal::zero() {
            return Err(ShoppingListError::NegativeBudget);
        }
        Ok(())
    }

    /// Marks the purchase as done. Finalizing twice keeps the first purchase time.
    pub fn finalize(&mut self, at: DateTime<Utc>) {
        if self.finalized {
            return;
        }
        self.finalized = true;
        self.purchased_at = Some(at);
    }
}

/// A list together with its items and the aggregates derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListDetails {
    pub list: ShoppingList,
    pub items: Vec<Item>,
}

impl ShoppingListDetails {
    pub fn new(list: ShoppingList, items: Vec<Item>) -> Self {
        Self { list, items }
    }

    pub fn total_value(&self) -> BigDecimal {
        let totals: Vec<BigDecimal> = self.items.iter().map(Item::total).collect();
        money::sum(&totals)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn purchased_count(&self) -> usize {
        self.items.iter().filter(|item| item.purchased).count()
    }

    /// Share of the budget spent, in percent. Zero when there is no budget.
    pub fn budget_percentage(&self) -> BigDecimal {
        if self.list.budget <= BigDecimal::zero() {
            return BigDecimal::zero();
        }
        self.total_value() / &self.list.budget * BigDecimal::from(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::model::NewItemProps;
    use crate::domain::shared::money::cents;
    use crate::domain::shared::value_objects::{Category, Unit};
    use proptest::prelude::*;

    fn item(name: &str, price_cents: i64, purchased: bool) -> Item {
        let mut item = Item::new(NewItemProps {
            list_id: ListId::new(1),
            name: name.to_string(),
            icon: None,
            unit: Unit::Unit,
            unit_price: cents(price_cents),
            quantity: None,
            manual_total: None,
            category: Category::Other,
        })
        .unwrap();
        item.purchased = purchased;
        item
    }

    #[test]
    fn should_create_list_when_valid() {
        let list = ShoppingList::new("Weekly".to_string(), cents(20000)).unwrap();

        assert!(list.id.is_none());
        assert!(!list.finalized);
        assert!(list.purchased_at.is_none());
    }

    #[test]
    fn should_reject_when_name_empty() {
        let result = ShoppingList::new(" ".to_string(), BigDecimal::zero());
        assert!(matches!(result.unwrap_err(), ShoppingListError::NameEmpty));
    }

    #[test]
    fn should_reject_negative_budget() {
        let result = ShoppingList::new("Weekly".to_string(), cents(-1));
        assert!(matches!(
            result.unwrap_err(),
            ShoppingListError::NegativeBudget
        ));
    }

    #[test]
    fn should_keep_first_purchase_time_when_finalized_twice() {
        let mut list = ShoppingList::new("Weekly".to_string(), BigDecimal::zero()).unwrap();
        let first = Utc::now();
        list.finalize(first);
        list.finalize(first + chrono::Duration::hours(1));

        assert!(list.finalized);
        assert_eq!(list.purchased_at, Some(first));
    }

    #[test]
    fn should_aggregate_items() {
        let list = ShoppingList::new("Weekly".to_string(), cents(1000)).unwrap();
        let details = ShoppingListDetails::new(
            list,
            vec![item("Milk", 450, true), item("Bread", 50, false)],
        );

        assert_eq!(details.total_value(), cents(500));
        assert_eq!(details.item_count(), 2);
        assert_eq!(details.purchased_count(), 1);
        assert_eq!(details.budget_percentage(), BigDecimal::from(50));
    }

    #[test]
    fn should_report_zero_percentage_without_budget() {
        let list = ShoppingList::new("Weekly".to_string(), BigDecimal::zero()).unwrap();
        let details = ShoppingListDetails::new(list, vec![item("Milk", 450, false)]);

        assert_eq!(details.budget_percentage(), BigDecimal::zero());
    }

    #[test]
    fn should_total_zero_when_empty() {
        let list = ShoppingList::new("Empty".to_string(), cents(100)).unwrap();
        let details = ShoppingListDetails::new(list, vec![]);

        assert_eq!(details.total_value(), BigDecimal::zero());
        assert_eq!(details.item_count(), 0);
    }

    proptest! {
        #[test]
        fn budget_percentage_never_negative(
            budget in -10_000i64..10_000,
            prices in proptest::collection::vec(0i64..10_000, 0..8),
        ) {
            let list = ShoppingList {
                id: None,
                name: "Any".to_string(),
                created_at: Utc::now(),
                purchased_at: None,
                finalized: false,
                budget: cents(budget),
            };
            let items = prices.iter().map(|p| item("Any", *p, false)).collect();
            let details = ShoppingListDetails::new(list, items);

            prop_assert!(details.budget_percentage() >= BigDecimal::zero());
        }
    }
}
