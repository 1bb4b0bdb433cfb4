use async_trait::async_trait;

use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingListDetails;

pub struct EnsureDefaultListParams {
    /// Fill a newly created default list with every catalog product.
    pub seed_from_catalog: bool,
}

#[async_trait]
pub trait EnsureDefaultListUseCase: Send + Sync {
    async fn execute(
        &self,
        params: EnsureDefaultListParams,
    ) -> Result<ShoppingListDetails, ShoppingListError>;
}
