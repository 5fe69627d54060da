//! Test Helpers

use foodio::discounts::DiscountPercent;
use rust_decimal::Decimal;
use testresult::TestError;

use crate::{
    domain::foods::{
        FoodsService,
        models::{Food, FoodUuid, NewFood},
    },
    test::TestContext,
};

/// Build a catalog record with placeholder description and image fields.
pub(crate) fn new_food(
    uuid: FoodUuid,
    name: &str,
    price: Decimal,
    discount: u8,
) -> Result<NewFood, TestError> {
    Ok(NewFood {
        uuid,
        name: name.to_string(),
        description: format!("{name} (test)"),
        category: "Test".to_string(),
        image: String::new(),
        rating: 4.0,
        price,
        discount_percent: DiscountPercent::new(discount)?,
    })
}

/// Create and persist a catalog record with a fresh UUID.
pub(crate) async fn create_food(
    ctx: &TestContext,
    name: &str,
    price: Decimal,
    discount: u8,
) -> Result<Food, TestError> {
    let food = ctx
        .foods
        .create_food(new_food(FoodUuid::new(), name, price, discount)?)
        .await?;

    Ok(food)
}
