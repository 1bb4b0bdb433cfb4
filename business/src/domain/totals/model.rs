use bigdecimal::BigDecimal;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::domain::item::model::Item;

/// Running totals over the items currently on screen.
///
/// Raw amounts only; currency formatting happens at the UI boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingTotals {
    /// Sum of every item's total.
    pub planned_total: BigDecimal,
    /// Sum of the totals of items already checked off.
    pub purchased_total: BigDecimal,
    /// `planned_total - purchased_total`.
    pub remaining_total: BigDecimal,
    pub item_count: usize,
    pub purchased_count: usize,
}

impl Default for ShoppingTotals {
    fn default() -> Self {
        Self {
            planned_total: BigDecimal::zero(),
            purchased_total: BigDecimal::zero(),
            remaining_total: BigDecimal::zero(),
            item_count: 0,
            purchased_count: 0,
        }
    }
}

impl ShoppingTotals {
    pub fn from_items(items: &[Item]) -> Self {
        let mut totals = Self::default();
        for item in items {
            let total = item.total();
            if item.purchased {
                totals.purchased_total += &total;
                totals.purchased_count += 1;
            }
            totals.planned_total += total;
            totals.item_count += 1;
        }
        totals.remaining_total = &totals.planned_total - &totals.purchased_total;
        totals
    }
}
