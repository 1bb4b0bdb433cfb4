use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::ListId;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::save::{SaveListParams, SaveListUseCase};

pub struct SaveListUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SaveListUseCase for SaveListUseCaseImpl {
    async fn execute(&self, params: SaveListParams) -> Result<ListId, ShoppingListError> {
        let list = params.list;
        self.logger
            .info(&format!("Saving shopping list: {}", list.name));

        list.validate()?;

        let id = self.repository.save(&list).await.map_err(|e| match e {
            RepositoryError::NotFound => ShoppingListError::NotFound,
            other => ShoppingListError::Repository(other),
        })?;

        self.logger.info(&format!("Shopping list saved: {}", id));
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::money::cents;
    use crate::domain::shopping_list::model::ShoppingList;
    use bigdecimal::BigDecimal;
    use chrono::Utc;
    use mockall::mock;
    use num_traits::Zero;

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
    async fn should_return_assigned_id_when_inserting() {
        let mut repo = MockListRepo::new();
        repo.expect_save()
            .withf(|list| list.id.is_none())
            .returning(|_| Ok(ListId::new(1)));

        let use_case = SaveListUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let list = ShoppingList::new("Weekly".to_string(), cents(20000)).unwrap();
        let result = use_case.execute(SaveListParams { list }).await;

        assert_eq!(result.unwrap(), ListId::new(1));
    }

    #[tokio::test]
    async fn should_reject_invalid_list_without_touching_store() {
        let use_case = SaveListUseCaseImpl {
            repository: Arc::new(MockListRepo::new()),
            logger: mock_logger(),
        };

        let mut list = ShoppingList::new("Weekly".to_string(), BigDecimal::zero()).unwrap();
        list.name = String::new();
        let result = use_case.execute(SaveListParams { list }).await;

        assert!(matches!(result.unwrap_err(), ShoppingListError::NameEmpty));
    }

    #[tokio::test]
    async fn should_report_not_found_when_updating_missing_list() {
        let mut repo = MockListRepo::new();
        repo.expect_save()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = SaveListUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let list = ShoppingList::from_repository(
            ListId::new(99),
            "Gone".to_string(),
            Utc::now(),
            None,
            false,
            BigDecimal::zero(),
        );
        let result = use_case.execute(SaveListParams { list }).await;

        assert!(matches!(result.unwrap_err(), ShoppingListError::NotFound));
    }
}
