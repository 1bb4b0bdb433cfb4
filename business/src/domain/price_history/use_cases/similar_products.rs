use async_trait::async_trait;

use crate::domain::price_history::errors::PriceHistoryError;

pub struct SimilarProductsParams {
    pub term: String,
}

#[async_trait]
pub trait SimilarProductsUseCase: Send + Sync {
    async fn execute(&self, params: SimilarProductsParams) -> Result<Vec<String>, PriceHistoryError>;
}
