use crate::error::AppError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// Utility for converting database errors to `AppError::Database`.
///
/// The constraint kind is folded into the message so the client sees what
/// the store rejected, e.g. a product pointing at a missing category.
pub struct DatabaseErrorConverter;

impl DatabaseErrorConverter {
    /// Converts a Diesel error, tagging it with the failed operation.
    pub fn convert_diesel_error(error: DieselError, operation: &str) -> AppError {
        match error {
            DieselError::DatabaseError(kind, info) => {
                let label = Self::kind_label(&kind);
                let message = match info.constraint_name() {
                    Some(constraint) => {
                        format!("{} ({}): {}", label, constraint, info.message())
                    }
                    None => format!("{}: {}", label, info.message()),
                };
                AppError::Database {
                    operation: operation.to_string(),
                    source: anyhow::Error::msg(message),
                }
            }
            other => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::from(other),
            },
        }
    }

    fn kind_label(kind: &DatabaseErrorKind) -> &'static str {
        match kind {
            DatabaseErrorKind::UniqueViolation => "Unique constraint violation",
            DatabaseErrorKind::ForeignKeyViolation => "Foreign key constraint violation",
            DatabaseErrorKind::NotNullViolation => "Not null constraint violation",
            DatabaseErrorKind::CheckViolation => "Check constraint violation",
            DatabaseErrorKind::UnableToSendCommand => "Unable to send command",
            DatabaseErrorKind::SerializationFailure => "Serialization failure",
            DatabaseErrorKind::ClosedConnection => "Connection closed",
            _ => "Database error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mock database error information for testing
    struct MockDatabaseErrorInfo {
        message: String,
        constraint_name: Option<String>,
    }

    impl diesel::result::DatabaseErrorInformation for MockDatabaseErrorInfo {
        fn message(&self) -> &str {
            &self.message
        }

        fn details(&self) -> Option<&str> {
            None
        }

        fn hint(&self) -> Option<&str> {
            None
        }

        fn table_name(&self) -> Option<&str> {
            None
        }

        fn column_name(&self) -> Option<&str> {
            None
        }

        fn constraint_name(&self) -> Option<&str> {
            self.constraint_name.as_deref()
        }

        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    #[test]
    fn test_convert_foreign_key_violation() {
        let info = MockDatabaseErrorInfo {
            message: "insert or update on table \"product\" violates foreign key constraint \"product_category_id_fkey\"".to_string(),
            constraint_name: Some("product_category_id_fkey".to_string()),
        };
        let error =
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, Box::new(info));

        let result = DatabaseErrorConverter::convert_diesel_error(error, "insert product");

        match result {
            AppError::Database { operation, source } => {
                assert_eq!(operation, "insert product");
                let message = source.to_string();
                assert!(message.starts_with("Foreign key constraint violation (product_category_id_fkey)"));
            }
            _ => panic!("Expected Database error, got: {:?}", result),
        }
    }

    #[test]
    fn test_convert_error_without_constraint_name() {
        let info = MockDatabaseErrorInfo {
            message: "relation \"product\" does not exist".to_string(),
            constraint_name: None,
        };
        let error = DieselError::DatabaseError(DatabaseErrorKind::ReadOnlyTransaction, Box::new(info));

        let result = DatabaseErrorConverter::convert_diesel_error(error, "select products");

        assert_eq!(
            result.to_string(),
            "Database operation failed: select products: Database error: relation \"product\" does not exist"
        );
    }

    #[test]
    fn test_convert_not_found_is_still_a_database_error() {
        let result = DatabaseErrorConverter::convert_diesel_error(DieselError::NotFound, "find product");
        assert!(matches!(result, AppError::Database { .. }));
    }
}
