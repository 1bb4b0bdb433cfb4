use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::errors::RepositoryError;
use crate::domain::item::model::Item;

#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Purchased items whose finalized list has `purchased_at` within
    /// `[start, end]`, resolved with a single join.
    async fn purchased_items_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Item>, RepositoryError>;
}
