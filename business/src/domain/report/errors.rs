#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("report.invalid_range")]
    InvalidRange,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
