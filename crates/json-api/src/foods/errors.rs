//! Food Errors

use salvo::http::StatusError;
use tracing::error;

use foodio_app::domain::foods::FoodsServiceError;

pub(crate) fn into_status_error(error: FoodsServiceError) -> StatusError {
    match error {
        FoodsServiceError::AlreadyExists => StatusError::conflict().brief("Food already exists"),
        FoodsServiceError::MissingRequiredData | FoodsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid food payload")
        }
        FoodsServiceError::Sql(source) => {
            error!("foods query failed: {source}");

            StatusError::internal_server_error()
        }
        FoodsServiceError::NotFound => StatusError::not_found().brief("Food not found"),
    }
}
