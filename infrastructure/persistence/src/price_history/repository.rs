use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use sqlx::SqliteConnection;

use business::domain::errors::RepositoryError;
use business::domain::price_history::model::PriceHistoryEntry;
use business::domain::price_history::repository::PriceHistoryRepository;
use business::domain::shared::value_objects::{PriceEntryId, Unit};

use super::entity::PriceHistoryEntity;
use crate::db::Database;
use crate::error::{decimal, storage_error};

pub struct PriceHistoryRepositorySqlite {
    database: Arc<Database>,
}

impl PriceHistoryRepositorySqlite {
    pub fn new(database: Arc<Database>) -> Self {
        Self { database }
    }
}

/// Appends one entry on the given connection, which may be inside a transaction.
pub(crate) async fn insert_entry(
    conn: &mut SqliteConnection,
    entry: &PriceHistoryEntry,
) -> Result<PriceEntryId, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO price_history (product_name, price, unit, recorded_at, location) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&entry.product_name)
    .bind(entry.price.to_string())
    .bind(entry.unit.code())
    .bind(entry.recorded_at)
    .bind(entry.location.as_deref())
    .execute(conn)
    .await?;

    Ok(PriceEntryId::new(result.last_insert_rowid()))
}

/// `term` as a literal LIKE substring pattern.
fn contains_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

#[async_trait]
impl PriceHistoryRepository for PriceHistoryRepositorySqlite {
    async fn record(&self, entry: &PriceHistoryEntry) -> Result<PriceEntryId, RepositoryError> {
        let pool = self.database.pool().await?;
        let mut conn = pool.acquire().await.map_err(storage_error("record_price"))?;

        insert_entry(&mut conn, entry)
            .await
            .map_err(storage_error("record_price"))
    }

    async fn get_by_product(
        &self,
        product_name: &str,
        limit: u32,
    ) -> Result<Vec<PriceHistoryEntry>, RepositoryError> {
        let pool = self.database.pool().await?;
        let entities = sqlx::query_as::<_, PriceHistoryEntity>(
            r#"SELECT id, product_name, price, unit, recorded_at, location
            FROM price_history
            WHERE product_name = ? COLLATE NOCASE
            ORDER BY julianday(recorded_at) DESC, id DESC
            LIMIT ?"#,
        )
        .bind(product_name)
        .bind(limit)
        .fetch_all(pool)
        .await
        .map_err(storage_error("price_history"))?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn recent_prices(
        &self,
        product_name: &str,
        unit: Unit,
        limit: u32,
    ) -> Result<Vec<BigDecimal>, RepositoryError> {
        let pool = self.database.pool().await?;
        let prices: Vec<String> = sqlx::query_scalar(
            r#"SELECT price
            FROM price_history
            WHERE product_name = ? COLLATE NOCASE AND unit = ?
            ORDER BY julianday(recorded_at) DESC, id DESC
            LIMIT ?"#,
        )
        .bind(product_name)
        .bind(unit.code())
        .bind(limit)
        .fetch_all(pool)
        .await
        .map_err(storage_error("average_price"))?;

        prices.iter().map(|price| decimal("price", price)).collect()
    }

    async fn find_product_names(
        &self,
        term: &str,
        limit: u32,
    ) -> Result<Vec<String>, RepositoryError> {
        let pool = self.database.pool().await?;
        sqlx::query_scalar(
            r#"SELECT MIN(product_name)
            FROM price_history
            WHERE product_name LIKE ? ESCAPE '\'
            GROUP BY product_name COLLATE NOCASE
            ORDER BY MIN(product_name) COLLATE NOCASE
            LIMIT ?"#,
        )
        .bind(contains_pattern(term))
        .bind(limit)
        .fetch_all(pool)
        .await
        .map_err(storage_error("similar_products"))
    }
}
