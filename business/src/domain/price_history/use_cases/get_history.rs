use async_trait::async_trait;

use crate::domain::price_history::errors::PriceHistoryError;
use crate::domain::price_history::model::PriceHistoryEntry;

pub struct GetPriceHistoryParams {
    pub product_name: String,
}

#[async_trait]
pub trait GetPriceHistoryUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetPriceHistoryParams,
    ) -> Result<Vec<PriceHistoryEntry>, PriceHistoryError>;
}
