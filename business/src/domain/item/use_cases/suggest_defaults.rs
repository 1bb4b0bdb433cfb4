use async_trait::async_trait;

use crate::domain::catalog::model::ProductDefaults;
use crate::domain::item::errors::ItemError;

pub struct SuggestItemDefaultsParams {
    pub name: String,
}

#[async_trait]
pub trait SuggestItemDefaultsUseCase: Send + Sync {
    async fn execute(&self, params: SuggestItemDefaultsParams) -> Result<ProductDefaults, ItemError>;
}
