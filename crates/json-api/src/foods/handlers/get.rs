//! Get Food Handler

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
    quantities::Quantity,
};
use foodio_app::domain::foods::models::Food;

use crate::{extensions::*, foods::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct FoodResponse {
    /// The unique identifier of the food
    pub uuid: Uuid,

    /// Display name
    pub name: String,

    /// Display description
    pub description: String,

    /// Menu category
    pub category: String,

    /// Image reference
    pub image: String,

    /// Display rating in [0, 5]
    pub rating: f32,

    /// Unit price, formatted to two decimal places
    pub price: String,

    /// Discount percentage in [0, 100]
    pub discount_percent: u8,

    /// Unit price after discount, formatted to two decimal places
    pub discounted_price: String,

    /// The date and time the food was created
    pub created_at: String,

    /// The date and time the food was last updated
    pub updated_at: String,
}

impl TryFrom<Food> for FoodResponse {
    type Error = PricingError;

    fn try_from(food: Food) -> Result<Self, Self::Error> {
        let totals = pricing::line_totals(&PricedLine {
            name: food.name.clone(),
            unit_price: food.price,
            discount: food.discount_percent,
            quantity: Quantity::ONE,
        })?;

        Ok(FoodResponse {
            uuid: food.uuid.into_uuid(),
            name: food.name,
            description: food.description,
            category: food.category,
            image: food.image,
            rating: food.rating,
            price: money::to_display_string(food.price),
            discount_percent: food.discount_percent.percent(),
            discounted_price: money::to_display_string(totals.discounted_unit_price),
            created_at: food.created_at.to_string(),
            updated_at: food.updated_at.to_string(),
        })
    }
}

/// Get Food Handler
///
/// Returns a food.
#[endpoint(tags("foods"), summary = "Get Food")]
pub(crate) async fn handler(
    food: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<FoodResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let food = state
        .foods
        .get_food(food.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(
        food.try_into().or_500("failed to price food for display")?,
    ))
}
