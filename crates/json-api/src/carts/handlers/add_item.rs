//! Add Cart Item Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    carts::{errors::into_status_error, get::CartLineResponse},
    extensions::*,
    state::State,
};

/// Add Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddCartItemRequest {
    /// Food to add
    pub food_uuid: Uuid,

    /// Units to add; defaults to one
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

fn default_quantity() -> i64 {
    1
}

/// Add Cart Item Handler
///
/// Adds units of a food to the cart, incrementing the existing line when one
/// is already present.
#[endpoint(
    tags("carts"),
    summary = "Add Item to Cart",
    responses(
        (status_code = StatusCode::CREATED, description = "Cart line created or incremented"),
        (status_code = StatusCode::NOT_FOUND, description = "Food not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    user: PathParam<Uuid>,
    json: JsonBody<AddCartItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartLineResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let user = user.into_inner();
    let request = json.into_inner();
    let food = request.food_uuid;

    let line = state
        .carts
        .add_to_cart(user.into(), food.into(), request.quantity)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/users/{user}/cart/items/{food}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(
        line.try_into().or_500("failed to price line for display")?,
    ))
}
