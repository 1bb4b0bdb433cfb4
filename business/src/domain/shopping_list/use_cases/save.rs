use async_trait::async_trait;

use crate::domain::shared::value_objects::ListId;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;

pub struct SaveListParams {
    pub list: ShoppingList,
}

#[async_trait]
pub trait SaveListUseCase: Send + Sync {
    async fn execute(&self, params: SaveListParams) -> Result<ListId, ShoppingListError>;
}
