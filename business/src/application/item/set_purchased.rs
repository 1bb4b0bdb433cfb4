use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::set_purchased::{
    SetItemPurchasedParams, SetItemPurchasedUseCase,
};
use crate::domain::logger::Logger;

pub struct SetItemPurchasedUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SetItemPurchasedUseCase for SetItemPurchasedUseCaseImpl {
    async fn execute(&self, params: SetItemPurchasedParams) -> Result<(), ItemError> {
        self.logger.debug(&format!(
            "Setting item {} purchased = {}",
            params.id, params.purchased
        ));

        let updated = self
            .repository
            .set_purchased(params.id, params.purchased)
            .await?;

        if updated == 0 {
            self.logger
                .warn(&format!("Item not found: {}", params.id));
            return Err(ItemError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::item::model::Item;
    use crate::domain::shared::value_objects::{ItemId, ListId};
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

    #[tokio::test]
    async fn should_toggle_purchased_flag() {
        let mut repo = MockItemRepo::new();
        repo.expect_set_purchased()
            .withf(|id, purchased| *id == ItemId::new(3) && *purchased)
            .times(1)
            .returning(|_, _| Ok(1));

        let use_case = SetItemPurchasedUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SetItemPurchasedParams {
                id: ItemId::new(3),
                purchased: true,
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_no_row_updated() {
        let mut repo = MockItemRepo::new();
        repo.expect_set_purchased().returning(|_, _| Ok(0));

        let use_case = SetItemPurchasedUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SetItemPurchasedParams {
                id: ItemId::new(3),
                purchased: false,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ItemError::NotFound));
    }
}
