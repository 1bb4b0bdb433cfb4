use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use num_traits::Zero;

use super::add_catalog_products::save_catalog_items;
use crate::domain::catalog::model::CatalogTable;
use crate::domain::errors::RepositoryError;
use crate::domain::item::repository::ItemRepository;
use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::{DEFAULT_LIST_NAME, ShoppingList, ShoppingListDetails};
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::ensure_default::{
    EnsureDefaultListParams, EnsureDefaultListUseCase,
};

pub struct EnsureDefaultListUseCaseImpl {
    pub list_repository: Arc<dyn ShoppingListRepository>,
    pub item_repository: Arc<dyn ItemRepository>,
    pub catalog: Arc<CatalogTable>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl EnsureDefaultListUseCase for EnsureDefaultListUseCaseImpl {
    async fn execute(
        &self,
        params: EnsureDefaultListParams,
    ) -> Result<ShoppingListDetails, ShoppingListError> {
        self.logger.debug("Ensuring the default shopping list exists");

        let candidate = ShoppingList::new(DEFAULT_LIST_NAME.to_string(), BigDecimal::zero())?;
        let (list, created) = self
            .list_repository
            .find_or_create_by_name(&candidate)
            .await?;
        let list_id = list.id.ok_or_else(|| {
            RepositoryError::constraint_violation("default list returned without an id")
        })?;

        // Only the call that created the list seeds it, so concurrent calls
        // never add the catalog twice.
        if created {
            self.logger
                .info(&format!("Default shopping list created: {}", list_id));
            if params.seed_from_catalog {
                let entries = self.catalog.list_all();
                let seeded =
                    save_catalog_items(self.item_repository.as_ref(), list_id, &entries).await;
                let ids = match seeded {
                    Ok(ids) => ids,
                    Err(error) => {
                        // Drop the half-seeded list so the next call creates and seeds it again.
                        self.logger.error(&format!(
                            "Seeding default shopping list {} failed: {}",
                            list_id, error
                        ));
                        if let Err(cleanup) = self.list_repository.delete(list_id).await {
                            self.logger.error(&format!(
                                "Removing default shopping list {} failed: {}",
                                list_id, cleanup
                            ));
                        }
                        return Err(error);
                    }
                };
                self.logger.info(&format!(
                    "Seeded default shopping list with {} products",
                    ids.len()
                ));
            }
        }

        let items = self.item_repository.get_by_list(list_id).await?;
        Ok(ShoppingListDetails::new(list, items))
    }
}
