use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::shared::value_objects::ListId;

pub struct GetItemsByListParams {
    pub list_id: ListId,
}

#[async_trait]
pub trait GetItemsByListUseCase: Send + Sync {
    async fn execute(&self, params: GetItemsByListParams) -> Result<Vec<Item>, ItemError>;
}
