//! Remove One Unit Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    carts::{errors::into_status_error, get::CartLineResponse},
    extensions::*,
    state::State,
};

/// Remove One Unit Handler
///
/// Removes one unit from a line. Returns the updated line while units remain,
/// and `204 No Content` once the line is gone.
#[endpoint(
    tags("carts"),
    summary = "Remove One Unit",
    responses(
        (status_code = StatusCode::OK, description = "Quantity decremented"),
        (status_code = StatusCode::NO_CONTENT, description = "Line removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart line not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    user: PathParam<Uuid>,
    food: PathParam<Uuid>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let line = state
        .carts
        .remove_one(user.into_inner().into(), food.into_inner().into())
        .await
        .map_err(into_status_error)?;

    match line {
        Some(line) => {
            let response: CartLineResponse =
                line.try_into().or_500("failed to price line for display")?;

            res.render(Json(response));
        }
        None => {
            res.status_code(StatusCode::NO_CONTENT);
        }
    }

    Ok(())
}
