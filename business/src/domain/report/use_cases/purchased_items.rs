use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::item::model::Item;
use crate::domain::report::errors::ReportError;

pub struct PurchasedItemsInRangeParams {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[async_trait]
pub trait PurchasedItemsInRangeUseCase: Send + Sync {
    async fn execute(&self, params: PurchasedItemsInRangeParams) -> Result<Vec<Item>, ReportError>;
}
