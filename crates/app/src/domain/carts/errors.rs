//! Carts service errors.

use foodio::quantities::QuantityError;
use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartsServiceError {
    /// Quantity missing, zero, negative, or non-integer where a positive
    /// integer is required.
    #[error("invalid quantity")]
    InvalidQuantity(#[from] QuantityError),

    /// No cart line exists for the targeted (user, food) pair, or the food
    /// is not in the catalog.
    #[error("cart line not found")]
    NotFound,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CartsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        // A foreign key violation on insert means the food is unknown.
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::ForeignKeyViolation) => Self::NotFound,
            _ => Self::Sql(error),
        }
    }
}
