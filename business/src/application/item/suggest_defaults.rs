use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::domain::catalog::model::{CatalogTable, ProductDefaults};
use crate::domain::item::errors::ItemError;
use crate::domain::item::use_cases::suggest_defaults::{
    SuggestItemDefaultsParams, SuggestItemDefaultsUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::price_history::model::AVERAGE_WINDOW;
use crate::domain::price_history::repository::PriceHistoryRepository;
use crate::domain::shared::money::mean;

/// Pre-fills a new item: catalog defaults, with the reference price replaced
/// by the recent average paid when there is price history for the product.
pub struct SuggestItemDefaultsUseCaseImpl {
    pub catalog: Arc<CatalogTable>,
    pub price_history_repository: Arc<dyn PriceHistoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SuggestItemDefaultsUseCase for SuggestItemDefaultsUseCaseImpl {
    async fn execute(
        &self,
        params: SuggestItemDefaultsParams,
    ) -> Result<ProductDefaults, ItemError> {
        let name = params.name.trim();
        if name.is_empty() {
            return Ok(ProductDefaults::default());
        }

        let mut defaults = self.catalog.lookup(name);
        let prices = self
            .price_history_repository
            .recent_prices(name, defaults.unit, AVERAGE_WINDOW)
            .await?;
        let average = mean(&prices);
        if average > BigDecimal::zero() {
            defaults.reference_price = average;
        }

        self.logger.debug(&format!(
            "Suggested defaults for '{}': {} {} at {}",
            name, defaults.category, defaults.unit, defaults.reference_price
        ));
        Ok(defaults)
    }
}
