use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::delete::{DeleteItemParams, DeleteItemUseCase};
use crate::domain::logger::Logger;

pub struct DeleteItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteItemUseCase for DeleteItemUseCaseImpl {
    async fn execute(&self, params: DeleteItemParams) -> Result<u64, ItemError> {
        self.logger.info(&format!("Deleting item: {}", params.id));

        let deleted = self.repository.delete(params.id).await?;

        if deleted == 0 {
            self.logger
                .warn(&format!("Item {} was already gone", params.id));
        }
        Ok(deleted)
    }
}
