use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::{ItemId, ListId};

use super::model::Item;

#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Items of a list ordered by category, then name.
    async fn get_by_list(&self, list_id: ListId) -> Result<Vec<Item>, RepositoryError>;
    /// Inserts when `item.id` is `None`, updates in place otherwise.
    ///
    /// Appends a price history entry in the same transaction when the unit
    /// price is positive. Fails with `ConstraintViolation` when the owning
    /// list does not exist or an update would move the item to another list.
    async fn save(&self, item: &Item) -> Result<ItemId, RepositoryError>;
    async fn delete(&self, id: ItemId) -> Result<u64, RepositoryError>;
    async fn set_purchased(&self, id: ItemId, purchased: bool) -> Result<u64, RepositoryError>;
}
