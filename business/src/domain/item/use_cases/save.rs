use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::shared::value_objects::ItemId;

pub struct SaveItemParams {
    pub item: Item,
}

#[async_trait]
pub trait SaveItemUseCase: Send + Sync {
    async fn execute(&self, params: SaveItemParams) -> Result<ItemId, ItemError>;
}
