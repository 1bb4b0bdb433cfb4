use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::domain::logger::Logger;
use crate::domain::price_history::errors::PriceHistoryError;
use crate::domain::price_history::model::AVERAGE_WINDOW;
use crate::domain::price_history::repository::PriceHistoryRepository;
use crate::domain::price_history::use_cases::average_price::{
    AveragePriceParams, AveragePriceUseCase,
};
use crate::domain::shared::money::mean;

/// Mean of the most recent prices for a product in one unit; zero without history.
pub struct AveragePriceUseCaseImpl {
    pub repository: Arc<dyn PriceHistoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AveragePriceUseCase for AveragePriceUseCaseImpl {
    async fn execute(&self, params: AveragePriceParams) -> Result<BigDecimal, PriceHistoryError> {
        let product_name = params.product_name.trim();
        if product_name.is_empty() {
            return Ok(BigDecimal::zero());
        }

        let prices = self
            .repository
            .recent_prices(product_name, params.unit, AVERAGE_WINDOW)
            .await?;
        let average = mean(&prices);

        self.logger.debug(&format!(
            "Average price for '{}' over {} entries: {}",
            product_name,
            prices.len(),
            average
        ));
        Ok(average)
    }
}
