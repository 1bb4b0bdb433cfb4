use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::logger::Logger;
use crate::domain::report::errors::ReportError;
use crate::domain::report::model::{DateRange, spend_by_category};
use crate::domain::report::repository::ReportRepository;
use crate::domain::report::use_cases::spend_by_category::{
    SpendByCategoryParams, SpendByCategoryUseCase,
};
use crate::domain::shared::value_objects::Category;

pub struct SpendByCategoryUseCaseImpl {
    pub repository: Arc<dyn ReportRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SpendByCategoryUseCase for SpendByCategoryUseCaseImpl {
    async fn execute(
        &self,
        params: SpendByCategoryParams,
    ) -> Result<BTreeMap<Category, BigDecimal>, ReportError> {
        let range = DateRange::new(params.start, params.end)?;

        let items = self
            .repository
            .purchased_items_in_range(range.start, range.end)
            .await?;
        let spend = spend_by_category(&items);

        self.logger.info(&format!(
            "Spend report between {} and {}: {} items in {} categories",
            range.start,
            range.end,
            items.len(),
            spend.len()
        ));
        Ok(spend)
    }
}
