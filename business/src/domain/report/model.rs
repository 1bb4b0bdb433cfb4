use std::collections::BTreeMap;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::Zero;

use super::errors::ReportError;
use crate::domain::item::model::Item;
use crate::domain::shared::value_objects::Category;

/// Inclusive purchase-date window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, ReportError> {
        if start > end {
            return Err(ReportError::InvalidRange);
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at <= self.end
    }
}

/// Sums item totals per category. Categories without items are absent.
pub fn spend_by_category(items: &[Item]) -> BTreeMap<Category, BigDecimal> {
    let mut spend: BTreeMap<Category, BigDecimal> = BTreeMap::new();
    for item in items {
        *spend.entry(item.category).or_insert_with(BigDecimal::zero) += item.total();
    }
    spend
}
