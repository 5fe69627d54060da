//! Carts service.
//!
//! The sole mutator of cart state. Every operation holds the cart line
//! invariants: at most one line per (user, food) pair, and a quantity of at
//! least one on every persisted line.

use async_trait::async_trait;
use foodio::quantities::Quantity;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        carts::{
            errors::CartsServiceError,
            models::{CartLine, CartLineUuid, UserUuid},
            repository::PgCartLinesRepository,
        },
        foods::models::FoodUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    repository: PgCartLinesRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCartLinesRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn add_to_cart(
        &self,
        user: UserUuid,
        food: FoodUuid,
        quantity_delta: i64,
    ) -> Result<CartLine, CartsServiceError> {
        let delta = Quantity::try_from(quantity_delta)?;

        let mut tx = self.db.begin().await?;

        // A single atomic insert-or-increment: concurrent adds for the same
        // pair serialize on the row and neither increment is lost.
        self.repository
            .upsert_line(&mut tx, CartLineUuid::new(), user, food, delta)
            .await?;

        let line = self.repository.get_line(&mut tx, user, food).await?;

        tx.commit().await?;

        Ok(line)
    }

    async fn set_quantity(
        &self,
        user: UserUuid,
        food: FoodUuid,
        quantity: i64,
    ) -> Result<CartLine, CartsServiceError> {
        let quantity = Quantity::try_from(quantity)?;

        let mut tx = self.db.begin().await?;

        if !self
            .repository
            .set_quantity(&mut tx, user, food, quantity)
            .await?
        {
            return Err(CartsServiceError::NotFound);
        }

        let line = self.repository.get_line(&mut tx, user, food).await?;

        tx.commit().await?;

        Ok(line)
    }

    async fn remove_one(
        &self,
        user: UserUuid,
        food: FoodUuid,
    ) -> Result<Option<CartLine>, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        // Decrement-if-above-one, else delete-if-exactly-one. Row locks
        // serialize concurrent removers; the worst concurrent outcome is a
        // NotFound for one of them, never a quantity below one.
        if self.repository.decrement_line(&mut tx, user, food).await? {
            let line = self.repository.get_line(&mut tx, user, food).await?;

            tx.commit().await?;

            return Ok(Some(line));
        }

        let rows_affected = self.repository.delete_line_at_one(&mut tx, user, food).await?;

        if rows_affected == 0 {
            return Err(CartsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(None)
    }

    async fn delete_line(&self, user: UserUuid, food: FoodUuid) -> Result<(), CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_line(&mut tx, user, food).await?;

        if rows_affected == 0 {
            return Err(CartsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn get_cart(&self, user: UserUuid) -> Result<Vec<CartLine>, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let lines = self.repository.get_cart(&mut tx, user).await?;

        tx.commit().await?;

        Ok(lines)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Add units of a food to a user's cart, creating the line on first
    /// add and incrementing it on subsequent adds. Returns the resulting
    /// line with its food joined.
    async fn add_to_cart(
        &self,
        user: UserUuid,
        food: FoodUuid,
        quantity_delta: i64,
    ) -> Result<CartLine, CartsServiceError>;

    /// Overwrite the quantity of an existing line. Non-positive quantities
    /// are rejected; deletion is always explicit.
    async fn set_quantity(
        &self,
        user: UserUuid,
        food: FoodUuid,
        quantity: i64,
    ) -> Result<CartLine, CartsServiceError>;

    /// Remove one unit: decrements a line above one, deletes a line at
    /// exactly one. Returns the updated line, or `None` once the line is
    /// gone.
    async fn remove_one(
        &self,
        user: UserUuid,
        food: FoodUuid,
    ) -> Result<Option<CartLine>, CartsServiceError>;

    /// Delete a line regardless of its quantity.
    async fn delete_line(&self, user: UserUuid, food: FoodUuid) -> Result<(), CartsServiceError>;

    /// All of a user's lines with food data joined, in insertion order. An
    /// empty cart is an empty list, not an error.
    async fn get_cart(&self, user: UserUuid) -> Result<Vec<CartLine>, CartsServiceError>;
}

#[cfg(test)]
mod tests {
    use foodio::quantities::QuantityError;
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::test::{TestContext, helpers};

    use super::*;

    #[tokio::test]
    async fn add_to_cart_creates_line_with_joined_food() -> TestResult {
        let ctx = TestContext::new().await;
        let user = UserUuid::new();

        let food = helpers::create_food(&ctx, "Paneer Tikka", Decimal::from(250), 10).await?;

        let line = ctx.carts.add_to_cart(user, food.uuid, 1).await?;

        assert_eq!(line.user_uuid, user);
        assert_eq!(line.food.uuid, food.uuid);
        assert_eq!(line.food.name, "Paneer Tikka");
        assert_eq!(line.quantity, Quantity::ONE);

        Ok(())
    }

    #[tokio::test]
    async fn adding_same_food_twice_collapses_to_one_line() -> TestResult {
        let ctx = TestContext::new().await;
        let user = UserUuid::new();

        let food = helpers::create_food(&ctx, "Masala Dosa", Decimal::from(120), 0).await?;

        ctx.carts.add_to_cart(user, food.uuid, 1).await?;
        let line = ctx.carts.add_to_cart(user, food.uuid, 1).await?;

        assert_eq!(line.quantity.get(), 2);

        let cart = ctx.carts.get_cart(user).await?;

        assert_eq!(cart.len(), 1, "duplicate adds must not create new lines");

        Ok(())
    }

    #[tokio::test]
    async fn add_to_cart_respects_quantity_delta() -> TestResult {
        let ctx = TestContext::new().await;
        let user = UserUuid::new();

        let food = helpers::create_food(&ctx, "Veg Biryani", Decimal::from(180), 5).await?;

        ctx.carts.add_to_cart(user, food.uuid, 3).await?;
        let line = ctx.carts.add_to_cart(user, food.uuid, 2).await?;

        assert_eq!(line.quantity.get(), 5);

        Ok(())
    }

    #[tokio::test]
    async fn add_to_cart_rejects_non_positive_delta() -> TestResult {
        let ctx = TestContext::new().await;
        let user = UserUuid::new();

        let food = helpers::create_food(&ctx, "Masala Chai", Decimal::from(40), 0).await?;

        for delta in [0, -1] {
            let result = ctx.carts.add_to_cart(user, food.uuid, delta).await;

            assert!(
                matches!(
                    result,
                    Err(CartsServiceError::InvalidQuantity(
                        QuantityError::NotPositive(_)
                    ))
                ),
                "expected InvalidQuantity for delta {delta}, got {result:?}"
            );
        }

        assert!(
            ctx.carts.get_cart(user).await?.is_empty(),
            "rejected adds must not create lines"
        );

        Ok(())
    }

    #[tokio::test]
    async fn add_to_cart_unknown_food_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .carts
            .add_to_cart(UserUuid::new(), FoodUuid::new(), 1)
            .await;

        assert!(
            matches!(result, Err(CartsServiceError::NotFound)),
            "expected NotFound for unknown food, got {result:?}"
        );
    }

    #[tokio::test]
    async fn set_quantity_overwrites_existing_line() -> TestResult {
        let ctx = TestContext::new().await;
        let user = UserUuid::new();

        let food = helpers::create_food(&ctx, "Butter Chicken", Decimal::from(320), 0).await?;

        ctx.carts.add_to_cart(user, food.uuid, 2).await?;
        let line = ctx.carts.set_quantity(user, food.uuid, 7).await?;

        assert_eq!(line.quantity.get(), 7);

        Ok(())
    }

    #[tokio::test]
    async fn set_quantity_zero_is_rejected_and_line_unchanged() -> TestResult {
        let ctx = TestContext::new().await;
        let user = UserUuid::new();

        let food = helpers::create_food(&ctx, "Gulab Jamun", Decimal::from(60), 0).await?;

        ctx.carts.add_to_cart(user, food.uuid, 2).await?;

        let result = ctx.carts.set_quantity(user, food.uuid, 0).await;

        assert!(
            matches!(result, Err(CartsServiceError::InvalidQuantity(_))),
            "expected InvalidQuantity, got {result:?}"
        );

        let cart = ctx.carts.get_cart(user).await?;

        assert_eq!(
            cart.first().map(|line| line.quantity.get()),
            Some(2),
            "a rejected set must leave the line untouched"
        );

        Ok(())
    }

    #[tokio::test]
    async fn set_quantity_missing_line_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        let food = helpers::create_food(&ctx, "Thali", Decimal::from(150), 0).await?;

        let result = ctx.carts.set_quantity(UserUuid::new(), food.uuid, 3).await;

        assert!(
            matches!(result, Err(CartsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn remove_one_decrements_above_one() -> TestResult {
        let ctx = TestContext::new().await;
        let user = UserUuid::new();

        let food = helpers::create_food(&ctx, "Masala Dosa", Decimal::from(120), 0).await?;

        ctx.carts.add_to_cart(user, food.uuid, 2).await?;

        let line = ctx.carts.remove_one(user, food.uuid).await?;

        assert_eq!(
            line.map(|line| line.quantity.get()),
            Some(1),
            "removing one from two should leave one"
        );

        Ok(())
    }

    #[tokio::test]
    async fn remove_one_at_quantity_one_deletes_the_line() -> TestResult {
        let ctx = TestContext::new().await;
        let user = UserUuid::new();

        let food = helpers::create_food(&ctx, "Masala Chai", Decimal::from(40), 0).await?;

        ctx.carts.add_to_cart(user, food.uuid, 1).await?;

        let removed = ctx.carts.remove_one(user, food.uuid).await?;

        assert!(removed.is_none(), "the line should be gone");
        assert!(
            ctx.carts.get_cart(user).await?.is_empty(),
            "the cart should no longer contain the line"
        );

        Ok(())
    }

    #[tokio::test]
    async fn remove_one_missing_line_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .carts
            .remove_one(UserUuid::new(), FoodUuid::new())
            .await;

        assert!(
            matches!(result, Err(CartsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn add_then_remove_one_are_exact_inverses() -> TestResult {
        let ctx = TestContext::new().await;
        let user = UserUuid::new();

        let food = helpers::create_food(&ctx, "Veg Biryani", Decimal::from(180), 5).await?;

        // From absent: add then remove returns to absent.
        ctx.carts.add_to_cart(user, food.uuid, 1).await?;
        ctx.carts.remove_one(user, food.uuid).await?;

        assert!(ctx.carts.get_cart(user).await?.is_empty());

        // From quantity 3: add then remove returns to 3.
        ctx.carts.add_to_cart(user, food.uuid, 3).await?;
        ctx.carts.add_to_cart(user, food.uuid, 1).await?;
        let line = ctx.carts.remove_one(user, food.uuid).await?;

        assert_eq!(line.map(|line| line.quantity.get()), Some(3));

        Ok(())
    }

    #[tokio::test]
    async fn delete_line_removes_regardless_of_quantity() -> TestResult {
        let ctx = TestContext::new().await;
        let user = UserUuid::new();

        let food = helpers::create_food(&ctx, "Butter Chicken", Decimal::from(320), 0).await?;

        ctx.carts.add_to_cart(user, food.uuid, 5).await?;
        ctx.carts.delete_line(user, food.uuid).await?;

        assert!(ctx.carts.get_cart(user).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn delete_line_missing_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .carts
            .delete_line(UserUuid::new(), FoodUuid::new())
            .await;

        assert!(
            matches!(result, Err(CartsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn get_cart_empty_returns_empty_list() -> TestResult {
        let ctx = TestContext::new().await;

        let cart = ctx.carts.get_cart(UserUuid::new()).await?;

        assert!(cart.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn get_cart_returns_lines_in_insertion_order() -> TestResult {
        let ctx = TestContext::new().await;
        let user = UserUuid::new();

        let first = helpers::create_food(&ctx, "Paneer Tikka", Decimal::from(250), 10).await?;
        let second = helpers::create_food(&ctx, "Gulab Jamun", Decimal::from(60), 0).await?;

        ctx.carts.add_to_cart(user, first.uuid, 1).await?;
        ctx.carts.add_to_cart(user, second.uuid, 1).await?;

        let cart = ctx.carts.get_cart(user).await?;
        let foods: Vec<FoodUuid> = cart.iter().map(|line| line.food.uuid).collect();

        assert_eq!(foods, vec![first.uuid, second.uuid]);

        Ok(())
    }

    #[tokio::test]
    async fn carts_of_different_users_are_independent() -> TestResult {
        let ctx = TestContext::new().await;
        let user_a = UserUuid::new();
        let user_b = UserUuid::new();

        let food = helpers::create_food(&ctx, "Masala Dosa", Decimal::from(120), 0).await?;

        ctx.carts.add_to_cart(user_a, food.uuid, 1).await?;
        ctx.carts.add_to_cart(user_b, food.uuid, 4).await?;

        ctx.carts.delete_line(user_a, food.uuid).await?;

        let cart_b = ctx.carts.get_cart(user_b).await?;

        assert_eq!(
            cart_b.first().map(|line| line.quantity.get()),
            Some(4),
            "deleting one user's line must not affect another's"
        );

        Ok(())
    }

    #[tokio::test]
    async fn concurrent_adds_from_absent_lose_no_increment() -> TestResult {
        let ctx = TestContext::new().await;
        let user = UserUuid::new();

        let food = helpers::create_food(&ctx, "Masala Chai", Decimal::from(40), 0).await?;

        let carts_a = ctx.carts.clone();
        let carts_b = ctx.carts.clone();

        let (first, second) = tokio::join!(
            carts_a.add_to_cart(user, food.uuid, 1),
            carts_b.add_to_cart(user, food.uuid, 1),
        );

        first?;
        second?;

        let cart = ctx.carts.get_cart(user).await?;

        assert_eq!(cart.len(), 1, "concurrent adds must not duplicate lines");
        assert_eq!(
            cart.first().map(|line| line.quantity.get()),
            Some(2),
            "both increments must survive the race"
        );

        Ok(())
    }
}
