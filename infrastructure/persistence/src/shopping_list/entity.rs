use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::ListId;
use business::domain::shopping_list::model::ShoppingList;

use crate::error::decimal;

pub(crate) const LIST_COLUMNS: &str = "id, name, created_at, purchased_at, finalized, budget";

#[derive(Debug, FromRow)]
pub struct ShoppingListEntity {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub purchased_at: Option<DateTime<Utc>>,
    pub finalized: bool,
    pub budget: String,
}

impl ShoppingListEntity {
    pub fn into_domain(self) -> Result<ShoppingList, RepositoryError> {
        Ok(ShoppingList::from_repository(
            ListId::new(self.id),
            self.name,
            self.created_at,
            self.purchased_at,
            self.finalized,
            decimal("budget", &self.budget)?,
        ))
    }
}
