use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::shared::value_objects::ItemId;

pub struct SetItemPurchasedParams {
    pub id: ItemId,
    pub purchased: bool,
}

#[async_trait]
pub trait SetItemPurchasedUseCase: Send + Sync {
    async fn execute(&self, params: SetItemPurchasedParams) -> Result<(), ItemError>;
}
