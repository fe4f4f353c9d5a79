use rusqlite::{ffi, ErrorCode};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Could not connect to database {path}: {source}")]
    Connect {
        path: String,
        source: rusqlite::Error,
    },

    #[error("That email is already in use. Please use a different email.")]
    DuplicateEmail,

    #[error("Integrity constraint violated: {0}")]
    Integrity(String),

    #[error("{0}")]
    Database(rusqlite::Error),
}

impl StoreError {
    pub fn connect(path: &str, source: rusqlite::Error) -> Self {
        Self::Connect {
            path: path.to_owned(),
            source,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(error: rusqlite::Error) -> Self {
        match &error {
            rusqlite::Error::SqliteFailure(failure, message)
                if failure.code == ErrorCode::ConstraintViolation =>
            {
                if failure.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE {
                    StoreError::DuplicateEmail
                } else {
                    StoreError::Integrity(
                        message.clone().unwrap_or_else(|| failure.to_string()),
                    )
                }
            }
            _ => StoreError::Database(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constraint_failure(extended_code: i32, message: &str) -> rusqlite::Error {
        rusqlite::Error::SqliteFailure(
            ffi::Error::new(extended_code),
            Some(message.to_owned()),
        )
    }

    #[test]
    fn unique_violation_is_duplicate_email() {
        let error = StoreError::from(constraint_failure(
            ffi::SQLITE_CONSTRAINT_UNIQUE,
            "UNIQUE constraint failed: students.email",
        ));

        assert!(matches!(error, StoreError::DuplicateEmail));
    }

    #[test]
    fn other_constraints_keep_driver_message() {
        let error = StoreError::from(constraint_failure(
            ffi::SQLITE_CONSTRAINT_NOTNULL,
            "NOT NULL constraint failed: students.name",
        ));

        match error {
            StoreError::Integrity(message) => {
                assert_eq!(message, "NOT NULL constraint failed: students.name")
            }
            other => panic!("Expected an integrity error, got {:?}", other),
        }
    }

    #[test]
    fn unrelated_errors_pass_through() {
        let error = StoreError::from(rusqlite::Error::QueryReturnedNoRows);

        assert!(matches!(
            error,
            StoreError::Database(rusqlite::Error::QueryReturnedNoRows)
        ));
    }
}
