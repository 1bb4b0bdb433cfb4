use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::{PriceEntryId, Unit};

use super::model::PriceHistoryEntry;

/// Product names are matched case-insensitively by every query.
#[async_trait]
pub trait PriceHistoryRepository: Send + Sync {
    async fn record(&self, entry: &PriceHistoryEntry) -> Result<PriceEntryId, RepositoryError>;
    /// Newest first, at most `limit` entries.
    async fn get_by_product(
        &self,
        product_name: &str,
        limit: u32,
    ) -> Result<Vec<PriceHistoryEntry>, RepositoryError>;
    /// Prices of the newest `limit` entries for the product in the given unit.
    async fn recent_prices(
        &self,
        product_name: &str,
        unit: Unit,
        limit: u32,
    ) -> Result<Vec<BigDecimal>, RepositoryError>;
    /// Distinct product names containing `term`.
    async fn find_product_names(
        &self,
        term: &str,
        limit: u32,
    ) -> Result<Vec<String>, RepositoryError>;
}
