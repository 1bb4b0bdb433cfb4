use async_trait::async_trait;

use crate::domain::shared::value_objects::{Category, ItemId, ListId};
use crate::domain::shopping_list::errors::ShoppingListError;

pub struct AddCatalogProductsParams {
    pub list_id: ListId,
    /// Restrict to one category; `None` adds the whole catalog.
    pub category: Option<Category>,
}

#[async_trait]
pub trait AddCatalogProductsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: AddCatalogProductsParams,
    ) -> Result<Vec<ItemId>, ShoppingListError>;
}
