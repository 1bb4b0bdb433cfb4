use std::collections::BTreeMap;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};

use crate::domain::report::errors::ReportError;
use crate::domain::shared::value_objects::Category;

pub struct SpendByCategoryParams {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[async_trait]
pub trait SpendByCategoryUseCase: Send + Sync {
    async fn execute(
        &self,
        params: SpendByCategoryParams,
    ) -> Result<BTreeMap<Category, BigDecimal>, ReportError>;
}
