use std::str::FromStr;

use bigdecimal::BigDecimal;
use tracing::error;

use business::domain::errors::RepositoryError;

/// Maps a sqlx failure of `operation` to the repository taxonomy.
///
/// Foreign key failures become `ConstraintViolation`; everything else is
/// reported as `StorageUnavailable`.
pub(crate) fn storage_error(operation: &'static str) -> impl Fn(sqlx::Error) -> RepositoryError {
    move |e| {
        if let sqlx::Error::Database(db_error) = &e
            && db_error.is_foreign_key_violation()
        {
            return RepositoryError::constraint_violation(db_error.message().to_string());
        }
        error!(operation, error = %e, "Storage operation failed");
        RepositoryError::storage_unavailable(operation, e.to_string())
    }
}

/// Parses a monetary column stored as decimal text.
pub(crate) fn decimal(column: &'static str, value: &str) -> Result<BigDecimal, RepositoryError> {
    BigDecimal::from_str(value).map_err(|e| {
        error!(column, value, error = %e, "Corrupt decimal column");
        RepositoryError::storage_unavailable("decode_row", format!("{column}: {e}"))
    })
}
