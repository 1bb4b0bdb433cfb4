use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::finalize::{FinalizeListParams, FinalizeListUseCase};

pub struct FinalizeListUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FinalizeListUseCase for FinalizeListUseCaseImpl {
    async fn execute(&self, params: FinalizeListParams) -> Result<ShoppingList, ShoppingListError> {
        self.logger
            .info(&format!("Finalizing shopping list: {}", params.id));

        let mut list = self
            .repository
            .get_by_id(params.id)
            .await?
            .ok_or(ShoppingListError::NotFound)?;

        if list.finalized {
            self.logger
                .info(&format!("Shopping list {} already finalized", params.id));
            return Ok(list);
        }

        list.finalize(Utc::now());
        self.repository.save(&list).await?;

        self.logger
            .info(&format!("Shopping list finalized: {}", params.id));
        Ok(list)
    }
}
