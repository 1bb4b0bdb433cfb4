#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("item.name_empty")]
    NameEmpty,
    #[error("item.name_too_long")]
    NameTooLong,
    #[error("item.icon_too_long")]
    IconTooLong,
    #[error("item.negative_price")]
    NegativePrice,
    #[error("item.non_positive_quantity")]
    NonPositiveQuantity,
    #[error("item.negative_manual_total")]
    NegativeManualTotal,
    #[error("item.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl ItemError {
    /// True for the variants raised by input validation, before any storage access.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ItemError::NameEmpty
                | ItemError::NameTooLong
                | ItemError::IconTooLong
                | ItemError::NegativePrice
                | ItemError::NonPositiveQuantity
                | ItemError::NegativeManualTotal
        )
    }
}
