use async_trait::async_trait;

use crate::domain::shared::value_objects::ListId;
use crate::domain::shopping_list::errors::ShoppingListError;

pub struct DeleteListParams {
    pub id: ListId,
}

#[async_trait]
pub trait DeleteListUseCase: Send + Sync {
    async fn execute(&self, params: DeleteListParams) -> Result<u64, ShoppingListError>;
}
