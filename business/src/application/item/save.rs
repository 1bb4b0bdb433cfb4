use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::errors::ItemError;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::save::{SaveItemParams, SaveItemUseCase};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::ItemId;

pub struct SaveItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SaveItemUseCase for SaveItemUseCaseImpl {
    async fn execute(&self, params: SaveItemParams) -> Result<ItemId, ItemError> {
        let item = params.item;
        self.logger.info(&format!(
            "Saving item '{}' on shopping list {}",
            item.name, item.list_id
        ));

        item.validate().inspect_err(|e| {
            self.logger
                .warn(&format!("Rejected item '{}': {}", item.name, e))
        })?;

        let id = self.repository.save(&item).await.map_err(|e| match e {
            RepositoryError::NotFound => ItemError::NotFound,
            other => {
                self.logger
                    .error(&format!("Failed to save item '{}': {}", item.name, other));
                ItemError::Repository(other)
            }
        })?;

        self.logger.info(&format!("Item saved: {}", id));
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::model::{Item, NewItemProps};
    use crate::domain::shared::money::cents;
    use crate::domain::shared::value_objects::{Category, ListId, Unit};
    use bigdecimal::BigDecimal;
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

    fn rice() -> Item {
        Item::new(NewItemProps {
            list_id: ListId::new(1),
            name: "Rice".to_string(),
            icon: Some("🍚".to_string()),
            unit: Unit::Kilogram,
            unit_price: cents(1250),
            quantity: Some(BigDecimal::from(2)),
            manual_total: None,
            category: Category::Other,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_return_new_id_when_inserting() {
        let mut repo = MockItemRepo::new();
        repo.expect_save()
            .withf(|item| item.id.is_none() && item.name == "Rice")
            .times(1)
            .returning(|_| Ok(ItemId::new(7)));

        let use_case = SaveItemUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(SaveItemParams { item: rice() }).await;

        assert_eq!(result.unwrap(), ItemId::new(7));
    }

    #[tokio::test]
    async fn should_reject_negative_price_without_touching_store() {
        let mut repo = MockItemRepo::new();
        repo.expect_save().never();

        let use_case = SaveItemUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let mut item = rice();
        item.unit_price = cents(-1);
        let result = use_case.execute(SaveItemParams { item }).await;

        assert!(matches!(result.unwrap_err(), ItemError::NegativePrice));
    }

    #[tokio::test]
    async fn should_report_not_found_when_updating_missing_item() {
        let mut repo = MockItemRepo::new();
        repo.expect_save().returning(|_| Err(RepositoryError::NotFound));

        let use_case = SaveItemUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let mut item = rice();
        item.id = Some(ItemId::new(99));
        let result = use_case.execute(SaveItemParams { item }).await;

        assert!(matches!(result.unwrap_err(), ItemError::NotFound));
    }

    #[tokio::test]
    async fn should_surface_missing_list_as_constraint_violation() {
        let mut repo = MockItemRepo::new();
        repo.expect_save().returning(|_| {
            Err(RepositoryError::constraint_violation(
                "shopping list 12 does not exist",
            ))
        });

        let use_case = SaveItemUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(SaveItemParams { item: rice() }).await;

        assert!(matches!(
            result.unwrap_err(),
            ItemError::Repository(RepositoryError::ConstraintViolation(_))
        ));
    }
}
