#[derive(Debug, thiserror::Error)]
pub enum PriceHistoryError {
    #[error("price_history.product_name_empty")]
    ProductNameEmpty,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
