//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};
use testresult::TestError;

use foodio::{discounts::DiscountPercent, quantities::Quantity};
use foodio_app::domain::{
    carts::{
        MockCartsService,
        models::{CartLine, CartLineUuid, UserUuid},
    },
    foods::{
        MockFoodsService,
        models::{Food, FoodUuid},
    },
};

use crate::state::State;

fn strict_foods_mock() -> MockFoodsService {
    let mut foods = MockFoodsService::new();

    foods.expect_list_foods().never();
    foods.expect_get_food().never();
    foods.expect_create_food().never();

    foods
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_add_to_cart().never();
    carts.expect_set_quantity().never();
    carts.expect_remove_one().never();
    carts.expect_delete_line().never();
    carts.expect_get_cart().never();

    carts
}

pub(crate) fn state_with_foods(foods: MockFoodsService) -> Arc<State> {
    Arc::new(State::new(Arc::new(foods), Arc::new(strict_carts_mock())))
}

pub(crate) fn state_with_carts(carts: MockCartsService) -> Arc<State> {
    Arc::new(State::new(Arc::new(strict_foods_mock()), Arc::new(carts)))
}

pub(crate) fn foods_service(foods: MockFoodsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_foods(foods)))
            .push(route),
    )
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_carts(carts)))
            .push(route),
    )
}

/// A 250.00 food with a 10% discount.
pub(crate) fn make_food(uuid: FoodUuid) -> Result<Food, TestError> {
    make_discounted_food(uuid, Decimal::from(250), 10)
}

pub(crate) fn make_discounted_food(
    uuid: FoodUuid,
    price: Decimal,
    discount: u8,
) -> Result<Food, TestError> {
    Ok(Food {
        uuid,
        name: "Paneer Tikka".to_string(),
        description: "Char-grilled paneer".to_string(),
        category: "Starters".to_string(),
        image: String::new(),
        rating: 4.5,
        price,
        discount_percent: DiscountPercent::new(discount)?,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    })
}

pub(crate) fn make_line(user: UserUuid, food: Food, quantity: u32) -> Result<CartLine, TestError> {
    Ok(CartLine {
        uuid: CartLineUuid::new(),
        user_uuid: user,
        food,
        quantity: Quantity::try_from(i64::from(quantity))?,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    })
}
