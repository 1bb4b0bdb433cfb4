use async_trait::async_trait;

use crate::domain::shared::value_objects::ListId;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;

pub struct FinalizeListParams {
    pub id: ListId,
}

#[async_trait]
pub trait FinalizeListUseCase: Send + Sync {
    async fn execute(&self, params: FinalizeListParams) -> Result<ShoppingList, ShoppingListError>;
}
