use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::price_history::errors::PriceHistoryError;
use crate::domain::shared::value_objects::Unit;

pub struct AveragePriceParams {
    pub product_name: String,
    pub unit: Unit,
}

#[async_trait]
pub trait AveragePriceUseCase: Send + Sync {
    async fn execute(&self, params: AveragePriceParams) -> Result<BigDecimal, PriceHistoryError>;
}
