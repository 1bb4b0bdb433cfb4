use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::repository::ItemRepository;
use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingListDetails;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::get_by_id::{GetListByIdParams, GetListByIdUseCase};

pub struct GetListByIdUseCaseImpl {
    pub list_repository: Arc<dyn ShoppingListRepository>,
    pub item_repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetListByIdUseCase for GetListByIdUseCaseImpl {
    async fn execute(
        &self,
        params: GetListByIdParams,
    ) -> Result<Option<ShoppingListDetails>, ShoppingListError> {
        self.logger
            .info(&format!("Fetching shopping list by id: {}", params.id));

        let Some(list) = self.list_repository.get_by_id(params.id).await? else {
            self.logger
                .info(&format!("Shopping list {} does not exist", params.id));
            return Ok(None);
        };

        let items = self.item_repository.get_by_list(params.id).await?;
        Ok(Some(ShoppingListDetails::new(list, items)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::item::model::Item;
    use crate::domain::shared::money::cents;
    use crate::domain::shared::value_objects::{ItemId, ListId};
    use crate::domain::shopping_list::model::ShoppingList;
    use chrono::Utc;
    use mockall::mock;

    mock! {
        pub ListRepo {}

        #[async_trait]
        impl ShoppingListRepository for ListRepo {
            async fn get_all(&self) -> Result<Vec<ShoppingList>, RepositoryError>;
            async fn get_by_id(&self, id: ListId) -> Result<Option<ShoppingList>, RepositoryError>;
            async fn save(&self, list: &ShoppingList) -> Result<ListId, RepositoryError>;
            async fn delete(&self, id: ListId) -> Result<u64, RepositoryError>;
            async fn find_or_create_by_name(&self, list: &ShoppingList) -> Result<(ShoppingList, bool), RepositoryError>;
        }
    }

    mock! {
        pub ItemRepo {}

        #[async_trait]
        impl ItemRepository for ItemRepo {
            async fn get_by_list(&self, list_id: ListId) -> Result<Vec<Item>, RepositoryError>;
            async fn save(&self, item: &Item) -> Result<ItemId, RepositoryError>;
            async fn delete(&self, id: ItemId) -> Result<u64, RepositoryError>;
            async fn set_purchased(&self, id: ItemId, purchased: bool) -> Result<u64, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_list_with_items_when_exists() {
        let list_id = ListId::new(5);
        let mut list_repo = MockListRepo::new();
        list_repo
            .expect_get_by_id()
            .withf(move |id| *id == list_id)
            .returning(move |_| {
                Ok(Some(ShoppingList::from_repository(
                    list_id,
                    "Weekly".to_string(),
                    Utc::now(),
                    None,
                    false,
                    cents(5000),
                )))
            });
        let mut item_repo = MockItemRepo::new();
        item_repo.expect_get_by_list().returning(|_| Ok(vec![]));

        let use_case = GetListByIdUseCaseImpl {
            list_repository: Arc::new(list_repo),
            item_repository: Arc::new(item_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetListByIdParams { id: list_id })
            .await
            .unwrap();

        let details = result.unwrap();
        assert_eq!(details.list.id, Some(list_id));
        assert!(details.items.is_empty());
    }

    #[tokio::test]
    async fn should_return_none_when_list_missing() {
        let mut list_repo = MockListRepo::new();
        list_repo.expect_get_by_id().returning(|_| Ok(None));

        let use_case = GetListByIdUseCaseImpl {
            list_repository: Arc::new(list_repo),
            item_repository: Arc::new(MockItemRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetListByIdParams {
                id: ListId::new(404),
            })
            .await;

        assert!(result.unwrap().is_none());
    }
}
