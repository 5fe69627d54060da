//! Food Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, foods::get::FoodResponse, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct FoodsResponse {
    /// The catalog
    pub foods: Vec<FoodResponse>,
}

/// Food Index Handler
///
/// Returns the catalog.
#[endpoint(tags("foods"), summary = "List Foods")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<FoodsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let foods = state
        .foods
        .list_foods()
        .await
        .or_500("failed to fetch foods")?;

    let foods = foods
        .into_iter()
        .map(TryInto::try_into)
        .collect::<Result<Vec<FoodResponse>, _>>()
        .or_500("failed to price foods for display")?;

    Ok(Json(FoodsResponse { foods }))
}
