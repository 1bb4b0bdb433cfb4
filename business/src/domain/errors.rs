/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// A targeted write addressed a row that does not exist.
    /// Lookups by id never produce this; they return `None`.
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.storage_unavailable ({operation})")]
    StorageUnavailable {
        operation: &'static str,
        cause: String,
    },
    #[error("repository.constraint_violation")]
    ConstraintViolation(String),
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn storage_unavailable(operation: &'static str, cause: impl Into<String>) -> Self {
        RepositoryError::StorageUnavailable {
            operation,
            cause: cause.into(),
        }
    }
    pub fn constraint_violation(detail: impl Into<String>) -> Self {
        RepositoryError::ConstraintViolation(detail.into())
    }

    /// Name of the storage operation that failed, when known.
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            RepositoryError::StorageUnavailable { operation, .. } => Some(*operation),
            _ => None,
        }
    }
}
