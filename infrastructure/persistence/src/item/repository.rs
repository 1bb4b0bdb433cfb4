use std::sync::Arc;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::item::model::Item;
use business::domain::item::repository::ItemRepository;
use business::domain::shared::value_objects::{ItemId, ListId};

use super::entity::{ITEM_COLUMNS, ItemEntity, into_items};
use crate::db::{BEGIN_WRITE, Database};
use crate::error::storage_error;
use crate::price_history::repository::insert_entry;

pub struct ItemRepositorySqlite {
    database: Arc<Database>,
}

impl ItemRepositorySqlite {
    pub fn new(database: Arc<Database>) -> Self {
        Self { database }
    }
}

#[async_trait]
impl ItemRepository for ItemRepositorySqlite {
    async fn get_by_list(&self, list_id: ListId) -> Result<Vec<Item>, RepositoryError> {
        let pool = self.database.pool().await?;
        let entities = sqlx::query_as::<_, ItemEntity>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE list_id = ? ORDER BY category, name COLLATE NOCASE, id"
        ))
        .bind(list_id.value())
        .fetch_all(pool)
        .await
        .map_err(storage_error("list_items"))?;

        into_items(entities)
    }

    async fn save(&self, item: &Item) -> Result<ItemId, RepositoryError> {
        let save_error = storage_error("save_item");
        let pool = self.database.pool().await?;
        let mut tx = pool.begin_with(BEGIN_WRITE).await.map_err(&save_error)?;

        // The write lock is held from BEGIN, so a concurrent list delete lands
        // entirely before or entirely after this save.
        let list_exists: Option<i64> = sqlx::query_scalar("SELECT id FROM lists WHERE id = ?")
            .bind(item.list_id.value())
            .fetch_optional(&mut *tx)
            .await
            .map_err(&save_error)?;
        if list_exists.is_none() {
            return Err(RepositoryError::constraint_violation(format!(
                "shopping list {} does not exist",
                item.list_id
            )));
        }

        if let Some(id) = item.id {
            let owner: Option<i64> = sqlx::query_scalar("SELECT list_id FROM items WHERE id = ?")
                .bind(id.value())
                .fetch_optional(&mut *tx)
                .await
                .map_err(&save_error)?;
            match owner {
                None => return Err(RepositoryError::NotFound),
                Some(owner) if owner != item.list_id.value() => {
                    return Err(RepositoryError::constraint_violation(format!(
                        "item {} belongs to shopping list {}",
                        id, owner
                    )));
                }
                Some(_) => {}
            }
        }

        if let Some(entry) = item.price_observation() {
            insert_entry(&mut tx, &entry).await.map_err(&save_error)?;
        }

        let id = match item.id {
            None => {
                let result = sqlx::query(
                    r#"INSERT INTO items (name, icon, unit, unit_price, quantity, manual_total, category, purchased, list_id, created_at)
                    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
                )
                .bind(&item.name)
                .bind(&item.icon)
                .bind(item.unit.code())
                .bind(item.unit_price.to_string())
                .bind(item.quantity.to_string())
                .bind(item.manual_total.as_ref().map(|total| total.to_string()))
                .bind(item.category.code())
                .bind(item.purchased)
                .bind(item.list_id.value())
                .bind(item.created_at)
                .execute(&mut *tx)
                .await
                .map_err(&save_error)?;
                ItemId::new(result.last_insert_rowid())
            }
            Some(id) => {
                sqlx::query(
                    r#"UPDATE items SET
                        name = ?,
                        icon = ?,
                        unit = ?,
                        unit_price = ?,
                        quantity = ?,
                        manual_total = ?,
                        category = ?,
                        purchased = ?
                    WHERE id = ?"#,
                )
                .bind(&item.name)
                .bind(&item.icon)
                .bind(item.unit.code())
                .bind(item.unit_price.to_string())
                .bind(item.quantity.to_string())
                .bind(item.manual_total.as_ref().map(|total| total.to_string()))
                .bind(item.category.code())
                .bind(item.purchased)
                .bind(id.value())
                .execute(&mut *tx)
                .await
                .map_err(&save_error)?;
                id
            }
        };

        tx.commit().await.map_err(&save_error)?;
        Ok(id)
    }

    async fn delete(&self, id: ItemId) -> Result<u64, RepositoryError> {
        let pool = self.database.pool().await?;
        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id.value())
            .execute(pool)
            .await
            .map_err(storage_error("delete_item"))?;

        Ok(result.rows_affected())
    }

    async fn set_purchased(&self, id: ItemId, purchased: bool) -> Result<u64, RepositoryError> {
        let pool = self.database.pool().await?;
        let result = sqlx::query("UPDATE items SET purchased = ? WHERE id = ?")
            .bind(purchased)
            .bind(id.value())
            .execute(pool)
            .await
            .map_err(storage_error("set_item_purchased"))?;

        Ok(result.rows_affected())
    }
}
