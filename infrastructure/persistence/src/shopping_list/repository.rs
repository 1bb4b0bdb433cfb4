use std::sync::Arc;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::ListId;
use business::domain::shopping_list::model::ShoppingList;
use business::domain::shopping_list::repository::ShoppingListRepository;

use super::entity::{LIST_COLUMNS, ShoppingListEntity};
use crate::db::{BEGIN_WRITE, Database};
use crate::error::storage_error;

pub struct ShoppingListRepositorySqlite {
    database: Arc<Database>,
}

impl ShoppingListRepositorySqlite {
    pub fn new(database: Arc<Database>) -> Self {
        Self { database }
    }
}

#[async_trait]
impl ShoppingListRepository for ShoppingListRepositorySqlite {
    async fn get_all(&self) -> Result<Vec<ShoppingList>, RepositoryError> {
        let pool = self.database.pool().await?;
        let entities = sqlx::query_as::<_, ShoppingListEntity>(&format!(
            "SELECT {LIST_COLUMNS} FROM lists ORDER BY julianday(created_at) DESC, id DESC"
        ))
        .fetch_all(pool)
        .await
        .map_err(storage_error("list_all_lists"))?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn get_by_id(&self, id: ListId) -> Result<Option<ShoppingList>, RepositoryError> {
        let pool = self.database.pool().await?;
        let entity = sqlx::query_as::<_, ShoppingListEntity>(&format!(
            "SELECT {LIST_COLUMNS} FROM lists WHERE id = ?"
        ))
        .bind(id.value())
        .fetch_optional(pool)
        .await
        .map_err(storage_error("get_list"))?;

        entity.map(|e| e.into_domain()).transpose()
    }

    async fn save(&self, list: &ShoppingList) -> Result<ListId, RepositoryError> {
        let pool = self.database.pool().await?;

        let Some(id) = list.id else {
            let result = sqlx::query(
                "INSERT INTO lists (name, created_at, purchased_at, finalized, budget) VALUES (?, ?, ?, ?, ?)",
            )
            .bind(&list.name)
            .bind(list.created_at)
            .bind(list.purchased_at)
            .bind(list.finalized)
            .bind(list.budget.to_string())
            .execute(pool)
            .await
            .map_err(storage_error("save_list"))?;

            return Ok(ListId::new(result.last_insert_rowid()));
        };

        // Finalization is one-way: a stale copy never reopens a list.
        let result = sqlx::query(
            r#"UPDATE lists SET
                name = ?,
                purchased_at = COALESCE(?, purchased_at),
                finalized = (finalized OR ?),
                budget = ?
            WHERE id = ?"#,
        )
        .bind(&list.name)
        .bind(list.purchased_at)
        .bind(list.finalized)
        .bind(list.budget.to_string())
        .bind(id.value())
        .execute(pool)
        .await
        .map_err(storage_error("save_list"))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(id)
    }

    async fn delete(&self, id: ListId) -> Result<u64, RepositoryError> {
        let pool = self.database.pool().await?;
        let mut tx = pool
            .begin_with(BEGIN_WRITE)
            .await
            .map_err(storage_error("delete_list"))?;

        sqlx::query("DELETE FROM items WHERE list_id = ?")
            .bind(id.value())
            .execute(&mut *tx)
            .await
            .map_err(storage_error("delete_list"))?;

        let result = sqlx::query("DELETE FROM lists WHERE id = ?")
            .bind(id.value())
            .execute(&mut *tx)
            .await
            .map_err(storage_error("delete_list"))?;

        tx.commit().await.map_err(storage_error("delete_list"))?;
        Ok(result.rows_affected())
    }

    async fn find_or_create_by_name(
        &self,
        list: &ShoppingList,
    ) -> Result<(ShoppingList, bool), RepositoryError> {
        let pool = self.database.pool().await?;

        // A single statement, so two callers cannot both see the name missing.
        let inserted = sqlx::query(
            r#"INSERT INTO lists (name, created_at, purchased_at, finalized, budget)
            SELECT ?, ?, ?, ?, ?
            WHERE NOT EXISTS (SELECT 1 FROM lists WHERE name = ?)"#,
        )
        .bind(&list.name)
        .bind(list.created_at)
        .bind(list.purchased_at)
        .bind(list.finalized)
        .bind(list.budget.to_string())
        .bind(&list.name)
        .execute(pool)
        .await
        .map_err(storage_error("find_or_create_list"))?;

        let entity = sqlx::query_as::<_, ShoppingListEntity>(&format!(
            "SELECT {LIST_COLUMNS} FROM lists WHERE name = ? ORDER BY id LIMIT 1"
        ))
        .bind(&list.name)
        .fetch_one(pool)
        .await
        .map_err(storage_error("find_or_create_list"))?;

        Ok((entity.into_domain()?, inserted.rows_affected() == 1))
    }
}
