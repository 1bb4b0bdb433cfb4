use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::get_by_list::{GetItemsByListParams, GetItemsByListUseCase};
use crate::domain::logger::Logger;

pub struct GetItemsByListUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetItemsByListUseCase for GetItemsByListUseCaseImpl {
    async fn execute(&self, params: GetItemsByListParams) -> Result<Vec<Item>, ItemError> {
        self.logger
            .debug(&format!("Fetching items of shopping list {}", params.list_id));

        let items = self.repository.get_by_list(params.list_id).await?;

        self.logger.debug(&format!(
            "Fetched {} items of shopping list {}",
            items.len(),
            params.list_id
        ));
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::item::model::NewItemProps;
    use crate::domain::shared::money::cents;
    use crate::domain::shared::value_objects::{Category, ItemId, ListId, Unit};
    use mockall::mock;

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

    fn item(name: &str, category: Category) -> Item {
        Item::new(NewItemProps {
            list_id: ListId::new(1),
            name: name.to_string(),
            icon: None,
            unit: Unit::Unit,
            unit_price: cents(100),
            quantity: None,
            manual_total: None,
            category,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_return_items_in_repository_order() {
        let mut repo = MockItemRepo::new();
        repo.expect_get_by_list()
            .withf(|list_id| *list_id == ListId::new(1))
            .returning(|_| {
                Ok(vec![
                    item("Apple", Category::ProduceAndVegetables),
                    item("Cheese", Category::Dairy),
                ])
            });

        let use_case = GetItemsByListUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let items = use_case
            .execute(GetItemsByListParams {
                list_id: ListId::new(1),
            })
            .await
            .unwrap();

        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Apple", "Cheese"]);
    }

    #[tokio::test]
    async fn should_return_empty_for_unknown_list() {
        let mut repo = MockItemRepo::new();
        repo.expect_get_by_list().returning(|_| Ok(vec![]));

        let use_case = GetItemsByListUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let items = use_case
            .execute(GetItemsByListParams {
                list_id: ListId::new(404),
            })
            .await
            .unwrap();

        assert!(items.is_empty());
    }
}
