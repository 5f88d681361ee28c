//! Shared Diesel error classification for the repositories.
//!
//! Adapters translate a [`DieselFailure`] into their own port error, so the
//! logging and the mapping of Diesel variants live in one place.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Coarse outcome of a failed Diesel operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DieselFailure {
    /// A unique constraint rejected the write.
    UniqueViolation { constraint: Option<String> },
    /// The connection dropped mid-operation.
    Connection(&'static str),
    /// Any other query failure.
    Query(&'static str),
}

/// Extract a readable message from a pool error.
pub(crate) fn pool_error_message(error: PoolError) -> String {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    }
}

/// Log and classify a Diesel error.
pub(crate) fn classify_diesel_error(error: DieselError) -> DieselFailure {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            DieselFailure::UniqueViolation {
                constraint: info.constraint_name().map(str::to_owned),
            }
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            DieselFailure::Connection("database connection error")
        }
        DieselError::NotFound => DieselFailure::Query("record not found"),
        DieselError::QueryBuilderError(_) => DieselFailure::Query("database query error"),
        _ => DieselFailure::Query("database error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn not_found_is_a_query_failure() {
        assert_eq!(
            classify_diesel_error(DieselError::NotFound),
            DieselFailure::Query("record not found")
        );
    }

    #[rstest]
    fn rollback_is_a_generic_query_failure() {
        assert_eq!(
            classify_diesel_error(DieselError::RollbackTransaction),
            DieselFailure::Query("database error")
        );
    }

    #[rstest]
    #[case(PoolError::checkout("timed out"), "timed out")]
    #[case(PoolError::build("bad url"), "bad url")]
    fn pool_errors_keep_their_message(#[case] error: PoolError, #[case] expected: &str) {
        assert_eq!(pool_error_message(error), expected);
    }
}
