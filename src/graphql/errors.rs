use async_graphql::*;

use crate::errors::CatalogError;

/// Structured error builder for consistent error handling
pub struct StructuredError;

impl StructuredError {
    /// Create a "database error"
    pub fn database(operation: &str, cause: impl std::fmt::Display) -> Error {
        Error::new(format!("Database error during {}: {}", operation, cause)).extend_with(|_, e| {
            e.set("code", "DATABASE_ERROR");
            e.set("operation", operation);
        })
    }

    /// Create an "internal error"
    pub fn internal(message: impl Into<String>) -> Error {
        Error::new(message.into()).extend_with(|_, e| {
            e.set("code", "INTERNAL_ERROR");
        })
    }
}

/// Map a service error onto a GraphQL error carrying an `extensions.code`.
pub fn catalog_error_to_graphql_error(error: CatalogError) -> Error {
    match &error {
        CatalogError::Database(cause) => StructuredError::database("catalog query", cause),
        CatalogError::Config(_) => {
            let code = error.error_code();
            Error::new(error.to_string()).extend_with(|_, e| {
                e.set("code", code);
            })
        }
        CatalogError::Io(_) => StructuredError::internal(error.to_string()),
    }
}
