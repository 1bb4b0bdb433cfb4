use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::model::Item;
use crate::domain::logger::Logger;
use crate::domain::report::errors::ReportError;
use crate::domain::report::model::DateRange;
use crate::domain::report::repository::ReportRepository;
use crate::domain::report::use_cases::purchased_items::{
    PurchasedItemsInRangeParams, PurchasedItemsInRangeUseCase,
};

pub struct PurchasedItemsInRangeUseCaseImpl {
    pub repository: Arc<dyn ReportRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PurchasedItemsInRangeUseCase for PurchasedItemsInRangeUseCaseImpl {
    async fn execute(&self, params: PurchasedItemsInRangeParams) -> Result<Vec<Item>, ReportError> {
        let range = DateRange::new(params.start, params.end)?;

        let items = self
            .repository
            .purchased_items_in_range(range.start, range.end)
            .await?;

        self.logger.debug(&format!(
            "Found {} purchased items between {} and {}",
            items.len(),
            range.start,
            range.end
        ));
        Ok(items)
    }
}
