use thiserror::Error;

/// SQLSTATE for a violated unique constraint.
pub const UNIQUE_VIOLATION: &str = "23505";

/// SQLSTATE for a violated foreign key.
pub const FOREIGN_KEY_VIOLATION: &str = "23503";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Already registered")]
    AlreadyRegistered,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some(UNIQUE_VIOLATION)
        )
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some(FOREIGN_KEY_VIOLATION)
        )
    }
}

/// Whether a raw sqlx error carries the given SQLSTATE.
pub fn has_sqlstate(error: &sqlx::Error, code: &str) -> bool {
    match error {
        sqlx::Error::Database(e) => e.code().as_deref() == Some(code),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_carry_no_sqlstate() {
        assert!(!has_sqlstate(&sqlx::Error::RowNotFound, UNIQUE_VIOLATION));
        assert!(!has_sqlstate(&sqlx::Error::PoolClosed, FOREIGN_KEY_VIOLATION));
    }

    #[test]
    fn plain_variants_are_not_violations() {
        assert!(!StorageError::NotFound.is_unique_violation());
        assert!(!StorageError::AlreadyRegistered.is_unique_violation());
        assert!(!StorageError::ConstraintViolation("x".into()).is_foreign_key_violation());
    }
}
