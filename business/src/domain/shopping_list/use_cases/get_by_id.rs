use async_trait::async_trait;

use crate::domain::shared::value_objects::ListId;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingListDetails;

pub struct GetListByIdParams {
    pub id: ListId,
}

#[async_trait]
pub trait GetListByIdUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetListByIdParams,
    ) -> Result<Option<ShoppingListDetails>, ShoppingListError>;
}
