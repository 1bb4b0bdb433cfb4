use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::price_history::errors::PriceHistoryError;
use crate::domain::price_history::model::PriceHistoryEntry;
use crate::domain::price_history::repository::PriceHistoryRepository;
use crate::domain::price_history::use_cases::record::{RecordPriceParams, RecordPriceUseCase};
use crate::domain::shared::value_objects::PriceEntryId;

pub struct RecordPriceUseCaseImpl {
    pub repository: Arc<dyn PriceHistoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RecordPriceUseCase for RecordPriceUseCaseImpl {
    async fn execute(&self, params: RecordPriceParams) -> Result<PriceEntryId, PriceHistoryError> {
        let product_name = params.product_name.trim();
        if product_name.is_empty() {
            return Err(PriceHistoryError::ProductNameEmpty);
        }

        let entry = PriceHistoryEntry::new(
            product_name.to_string(),
            params.price,
            params.unit,
            params.location,
        );
        let id = self.repository.record(&entry).await?;

        self.logger.debug(&format!(
            "Recorded price {} per {} for '{}'",
            entry.price, entry.unit, entry.product_name
        ));
        Ok(id)
    }
}
