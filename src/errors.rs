//! Error types shared by the catalog services, configuration loading and
//! the GraphQL layer.
//!
//! Missing actors and movies are not errors: the services report them as
//! outcomes so the API can answer with `ok: false`. Everything in here is a
//! genuine fault that the caller cannot recover from within the request.

use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// Store operation failed
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Configuration file could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    /// Get error code for GraphQL/API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            CatalogError::Database(_) => "DATABASE_ERROR",
            CatalogError::Config(_) => "CONFIG_ERROR",
            CatalogError::Io(_) => "INTERNAL_ERROR",
        }
    }
}
