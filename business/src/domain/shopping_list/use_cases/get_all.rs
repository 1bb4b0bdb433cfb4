use async_trait::async_trait;

use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingListDetails;

#[async_trait]
pub trait GetAllListsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ShoppingListDetails>, ShoppingListError>;
}
