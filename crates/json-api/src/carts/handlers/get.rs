//! Get Cart Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use foodio::{
    money,
    pricing::{self, PricedLine, PricingError},
};
use foodio_app::domain::carts::models::CartLine;

use crate::{carts::errors::into_status_error, extensions::*, foods::get::FoodResponse, state::State};

/// A cart line with its food joined and per-line pricing applied.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartLineResponse {
    /// The unique identifier of the cart line
    pub uuid: Uuid,

    /// The food this line refers to
    pub food: FoodResponse,

    /// Number of units
    pub quantity: u32,

    /// Unit price after discount, formatted to two decimal places
    pub discounted_unit_price: String,

    /// Discounted unit price times quantity, formatted to two decimal places
    pub line_total: String,

    /// The date and time the line was created
    pub created_at: String,

    /// The date and time the line was last updated
    pub updated_at: String,
}

impl TryFrom<CartLine> for CartLineResponse {
    type Error = PricingError;

    fn try_from(line: CartLine) -> Result<Self, Self::Error> {
        let totals = pricing::line_totals(&priced_line(&line))?;

        Ok(CartLineResponse {
            uuid: line.uuid.into_uuid(),
            quantity: line.quantity.get(),
            discounted_unit_price: money::to_display_string(totals.discounted_unit_price),
            line_total: money::to_display_string(totals.line_total),
            created_at: line.created_at.to_string(),
            updated_at: line.updated_at.to_string(),
            food: line.food.try_into()?,
        })
    }
}

/// Cart totals, all formatted to two decimal places.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartTotalsResponse {
    /// Sum of discounted line totals
    pub subtotal: String,

    /// Tax on the subtotal
    pub tax: String,

    /// Delivery fee
    pub delivery_fee: String,

    /// Subtotal plus tax plus delivery fee
    pub grand_total: String,
}

/// A user's cart with totals.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// Cart lines in insertion order
    pub lines: Vec<CartLineResponse>,

    /// Totals over the whole cart
    pub totals: CartTotalsResponse,
}

pub(crate) fn priced_line(line: &CartLine) -> PricedLine {
    PricedLine {
        name: line.food.name.clone(),
        unit_price: line.food.price,
        discount: line.food.discount_percent,
        quantity: line.quantity,
    }
}

fn cart_response(lines: Vec<CartLine>) -> Result<CartResponse, PricingError> {
    let priced: Vec<PricedLine> = lines.iter().map(priced_line).collect();
    let totals = pricing::compute_totals(&priced)?;

    Ok(CartResponse {
        lines: lines
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<_>, _>>()?,
        totals: CartTotalsResponse {
            subtotal: money::to_display_string(totals.subtotal),
            tax: money::to_display_string(totals.tax),
            delivery_fee: money::to_display_string(totals.delivery_fee),
            grand_total: money::to_display_string(totals.grand_total),
        },
    })
}

/// Get Cart Handler
///
/// Returns a user's cart with totals computed from live catalog prices.
#[endpoint(tags("carts"), summary = "Get Cart")]
pub(crate) async fn handler(
    user: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let lines = state
        .carts
        .get_cart(user.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(
        cart_response(lines).or_500("failed to price cart for display")?,
    ))
}
