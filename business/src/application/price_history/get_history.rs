use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::price_history::errors::PriceHistoryError;
use crate::domain::price_history::model::{HISTORY_LIMIT, PriceHistoryEntry};
use crate::domain::price_history::repository::PriceHistoryRepository;
use crate::domain::price_history::use_cases::get_history::{
    GetPriceHistoryParams, GetPriceHistoryUseCase,
};

pub struct GetPriceHistoryUseCaseImpl {
    pub repository: Arc<dyn PriceHistoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetPriceHistoryUseCase for GetPriceHistoryUseCaseImpl {
    async fn execute(
        &self,
        params: GetPriceHistoryParams,
    ) -> Result<Vec<PriceHistoryEntry>, PriceHistoryError> {
        let product_name = params.product_name.trim();
        if product_name.is_empty() {
            return Ok(vec![]);
        }

        let entries = self
            .repository
            .get_by_product(product_name, HISTORY_LIMIT)
            .await?;

        self.logger.debug(&format!(
            "Fetched {} price entries for '{}'",
            entries.len(),
            product_name
        ));
        Ok(entries)
    }
}
