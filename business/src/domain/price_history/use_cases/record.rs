use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::price_history::errors::PriceHistoryError;
use crate::domain::shared::value_objects::{PriceEntryId, Unit};

pub struct RecordPriceParams {
    pub product_name: String,
    pub price: BigDecimal,
    pub unit: Unit,
    pub location: Option<String>,
}

#[async_trait]
pub trait RecordPriceUseCase: Send + Sync {
    async fn execute(&self, params: RecordPriceParams) -> Result<PriceEntryId, PriceHistoryError>;
}
