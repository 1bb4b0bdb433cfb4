use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::model::{CatalogEntry, CatalogTable};
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::{ItemId, ListId};
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::add_catalog_products::{
    AddCatalogProductsParams, AddCatalogProductsUseCase,
};

pub struct AddCatalogProductsUseCaseImpl {
    pub list_repository: Arc<dyn ShoppingListRepository>,
    pub item_repository: Arc<dyn ItemRepository>,
    pub catalog: Arc<CatalogTable>,
    pub logger: Arc<dyn Logger>,
}

/// Saves one item per catalog entry into the list, in catalog order.
pub(crate) async fn save_catalog_items(
    item_repository: &dyn ItemRepository,
    list_id: ListId,
    entries: &[&CatalogEntry],
) -> Result<Vec<ItemId>, ShoppingListError> {
    let mut ids = Vec::with_capacity(entries.len());
    for entry in entries {
        let item = Item::from_catalog(list_id, entry);
        item.validate()?;
        ids.push(item_repository.save(&item).await?);
    }
    Ok(ids)
}

#[async_trait]
impl AddCatalogProductsUseCase for AddCatalogProductsUseCaseImpl {
    async fn execute(
        &self,
        params: AddCatalogProductsParams,
    ) -> Result<Vec<ItemId>, ShoppingListError> {
        self.logger.info(&format!(
            "Adding catalog products to shopping list {}",
            params.list_id
        ));

        if self
            .list_repository
            .get_by_id(params.list_id)
            .await?
            .is_none()
        {
            return Err(ShoppingListError::NotFound);
        }

        let entries = match params.category {
            Some(category) => self.catalog.list_by_category(category),
            None => self.catalog.list_all(),
        };
        let ids =
            save_catalog_items(self.item_repository.as_ref(), params.list_id, &entries).await?;

        self.logger.info(&format!(
            "Added {} catalog products to shopping list {}",
            ids.len(),
            params.list_id
        ));
        Ok(ids)
    }
}
