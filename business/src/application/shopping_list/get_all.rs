use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::repository::ItemRepository;
use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingListDetails;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::get_all::GetAllListsUseCase;

pub struct GetAllListsUseCaseImpl {
    pub list_repository: Arc<dyn ShoppingListRepository>,
    pub item_repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllListsUseCase for GetAllListsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<ShoppingListDetails>, ShoppingListError> {
        self.logger.info("Fetching all shopping lists");

        let lists = self.list_repository.get_all().await?;
        let mut details = Vec::with_capacity(lists.len());
        // One item query per list; list counts stay small.
        for list in lists {
            let items = match list.id {
                Some(id) => self.item_repository.get_by_list(id).await?,
                None => Vec::new(),
            };
            details.push(ShoppingListDetails::new(list, items));
        }

        self.logger
            .info(&format!("Found {} shopping lists", details.len()));
        Ok(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::item::model::Item;
    use crate::domain::shared::money::cents;
    use crate::domain::shared::value_objects::{Category, ItemId, ListId, Unit};
    use crate::domain::shopping_list::model::ShoppingList;
    use chrono::Utc;
    use mockall::mock;
    use num_traits::One;

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

    fn stored_list(id: i64, name: &str) -> ShoppingList {
        ShoppingList::from_repository(
            ListId::new(id),
            name.to_string(),
            Utc::now(),
            None,
            false,
            cents(10000),
        )
    }

    fn stored_item(id: i64, list_id: i64, price_cents: i64) -> Item {
        Item::from_repository(
            ItemId::new(id),
            "Milk".to_string(),
            "🥛".to_string(),
            Unit::Liter,
            cents(price_cents),
            bigdecimal::BigDecimal::one(),
            None,
            Category::Dairy,
            false,
            ListId::new(list_id),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn should_populate_each_list_with_its_items() {
        let mut list_repo = MockListRepo::new();
        list_repo
            .expect_get_all()
            .returning(|| Ok(vec![stored_list(2, "Party"), stored_list(1, "Weekly")]));

        let mut item_repo = MockItemRepo::new();
        item_repo
            .expect_get_by_list()
            .withf(|id| *id == ListId::new(2))
            .returning(|_| Ok(vec![stored_item(10, 2, 450), stored_item(11, 2, 550)]));
        item_repo
            .expect_get_by_list()
            .withf(|id| *id == ListId::new(1))
            .returning(|_| Ok(vec![]));

        let use_case = GetAllListsUseCaseImpl {
            list_repository: Arc::new(list_repo),
            item_repository: Arc::new(item_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await.unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].list.name, "Party");
        assert_eq!(result[0].item_count(), 2);
        assert_eq!(result[0].total_value(), cents(1000));
        assert_eq!(result[1].item_count(), 0);
    }

    #[tokio::test]
    async fn should_propagate_storage_failure() {
        let mut list_repo = MockListRepo::new();
        list_repo
            .expect_get_all()
            .returning(|| Err(RepositoryError::storage_unavailable("get_all_lists", "locked")));

        let use_case = GetAllListsUseCaseImpl {
            list_repository: Arc::new(list_repo),
            item_repository: Arc::new(MockItemRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(
            result.unwrap_err(),
            ShoppingListError::Repository(RepositoryError::StorageUnavailable { .. })
        ));
    }
}
