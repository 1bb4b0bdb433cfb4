use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::errors::RepositoryError;
use business::domain::item::model::Item;
use business::domain::report::model::DateRange;
use business::domain::report::repository::ReportRepository;

use crate::db::Database;
use crate::error::storage_error;
use crate::item::entity::ItemEntity;

#[derive(Debug, FromRow)]
struct PurchasedItemRow {
    #[sqlx(flatten)]
    item: ItemEntity,
    list_purchased_at: DateTime<Utc>,
}

pub struct ReportRepositorySqlite {
    database: Arc<Database>,
}

impl ReportRepositorySqlite {
    pub fn new(database: Arc<Database>) -> Self {
        Self { database }
    }
}

#[async_trait]
impl ReportRepository for ReportRepositorySqlite {
    async fn purchased_items_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Item>, RepositoryError> {
        let pool = self.database.pool().await?;
        // julianday() is only millisecond-precise, so SQL narrows the rows with
        // a second of slack and the exact bounds are checked on the decoded value.
        let rows = sqlx::query_as::<_, PurchasedItemRow>(
            r#"SELECT i.id, i.name, i.icon, i.unit, i.unit_price, i.quantity, i.manual_total,
                i.category, i.purchased, i.list_id, i.created_at,
                l.purchased_at AS list_purchased_at
            FROM items i
            INNER JOIN lists l ON l.id = i.list_id
            WHERE i.purchased = 1
                AND l.finalized = 1
                AND l.purchased_at IS NOT NULL
                AND julianday(l.purchased_at)
                    BETWEEN julianday(?) - 1.0 / 86400 AND julianday(?) + 1.0 / 86400
            ORDER BY i.category, i.name COLLATE NOCASE, i.id"#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await
        .map_err(storage_error("purchased_items_in_range"))?;

        let range = DateRange { start, end };
        rows.into_iter()
            .filter(|row| range.contains(row.list_purchased_at))
            .map(|row| row.item.into_domain())
            .collect()
    }
}
