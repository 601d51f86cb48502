//! Products service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error as ThisError;

use crate::domain::products::models::ProductUuid;

#[derive(Debug, ThisError)]
pub enum ProductsServiceError {
    #[error("Product not found with id: {0}")]
    NotFound(ProductUuid),

    #[error("Product not found with SKU: {0}")]
    SkuNotFound(String),

    #[error("Product with SKU '{0}' already exists")]
    DuplicateSku(String),

    #[error("Insufficient stock. Current quantity: {current}")]
    InsufficientStock { current: i32 },

    #[error("{0}")]
    Validation(String),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl ProductsServiceError {
    /// Translate a write failure, attributing unique-key violations to the SKU.
    ///
    /// The service checks `exists_by_sku` up front, but a concurrent writer can
    /// still win the race to the unique index; the constraint violation is the
    /// authoritative signal.
    pub(crate) fn on_sku_conflict(error: Error, sku: &str) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::DuplicateSku(sku.to_string()),
            _ => Self::Sql(error),
        }
    }
}

impl From<Error> for ProductsServiceError {
    fn from(error: Error) -> Self {
        Self::Sql(error)
    }
}
