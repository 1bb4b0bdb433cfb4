use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::ListId;

use super::model::ShoppingList;

#[async_trait]
pub trait ShoppingListRepository: Send + Sync {
    /// Newest first by creation time.
    async fn get_all(&self) -> Result<Vec<ShoppingList>, RepositoryError>;
    async fn get_by_id(&self, id: ListId) -> Result<Option<ShoppingList>, RepositoryError>;
    /// Inserts when `list.id` is `None`, updates in place otherwise.
    /// An update never clears `finalized`.
    async fn save(&self, list: &ShoppingList) -> Result<ListId, RepositoryError>;
    /// Deletes the list's items, then the list, as one atomic step.
    async fn delete(&self, id: ListId) -> Result<u64, RepositoryError>;
    /// Returns the oldest list named `list.name`, inserting `list` when none
    /// exists. The flag is true when this call inserted it.
    async fn find_or_create_by_name(
        &self,
        list: &ShoppingList,
    ) -> Result<(ShoppingList, bool), RepositoryError>;
}
