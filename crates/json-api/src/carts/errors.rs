//! Cart Errors

use salvo::http::StatusError;
use tracing::error;

use foodio_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::InvalidQuantity(source) => {
            StatusError::bad_request().brief(source.to_string())
        }
        CartsServiceError::NotFound => StatusError::not_found().brief("Cart line not found"),
        CartsServiceError::Sql(source) => {
            error!("carts query failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
