use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::delete::{DeleteListParams, DeleteListUseCase};

pub struct DeleteListUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteListUseCase for DeleteListUseCaseImpl {
    async fn execute(&self, params: DeleteListParams) -> Result<u64, ShoppingListError> {
        self.logger
            .info(&format!("Deleting shopping list: {}", params.id));

        let deleted = self.repository.delete(params.id).await.inspect_err(|e| {
            self.logger.error(&format!(
                "Failed to delete shopping list {}: {}",
                params.id, e
            ))
        })?;

        if deleted == 0 {
            self.logger
                .warn(&format!("Shopping list {} was already gone", params.id));
        } else {
            self.logger
                .info(&format!("Shopping list deleted: {}", params.id));
        }
        Ok(deleted)
    }
}
