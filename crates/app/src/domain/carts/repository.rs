//! Cart Lines Repository

use foodio::quantities::Quantity;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    carts::models::{CartLine, CartLineUuid, UserUuid},
    foods::{
        models::{Food, FoodUuid},
        repository::try_get_discount,
    },
};

const UPSERT_LINE_SQL: &str = include_str!("sql/upsert_line.sql");
const GET_LINE_SQL: &str = include_str!("sql/get_line.sql");
const GET_CART_SQL: &str = include_str!("sql/get_cart.sql");
const SET_QUANTITY_SQL: &str = include_str!("sql/set_quantity.sql");
const DECREMENT_LINE_SQL: &str = include_str!("sql/decrement_line.sql");
const DELETE_LINE_AT_ONE_SQL: &str = include_str!("sql/delete_line_at_one.sql");
const DELETE_LINE_SQL: &str = include_str!("sql/delete_line.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartLinesRepository;

impl PgCartLinesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Insert a line or add to an existing one's quantity, in a single
    /// atomic statement. Two concurrent upserts for the same (user, food)
    /// pair cannot lose an increment.
    pub(crate) async fn upsert_line(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        line: CartLineUuid,
        user: UserUuid,
        food: FoodUuid,
        quantity_delta: Quantity,
    ) -> Result<(), sqlx::Error> {
        query(UPSERT_LINE_SQL)
            .bind(line.into_uuid())
            .bind(user.into_uuid())
            .bind(food.into_uuid())
            .bind(try_to_pg_quantity(quantity_delta)?)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn get_line(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        food: FoodUuid,
    ) -> Result<CartLine, sqlx::Error> {
        query_as::<Postgres, CartLine>(GET_LINE_SQL)
            .bind(user.into_uuid())
            .bind(food.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<Vec<CartLine>, sqlx::Error> {
        query_as::<Postgres, CartLine>(GET_CART_SQL)
            .bind(user.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    /// Overwrite a line's quantity. Returns `false` when no line exists for
    /// the pair.
    pub(crate) async fn set_quantity(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        food: FoodUuid,
        quantity: Quantity,
    ) -> Result<bool, sqlx::Error> {
        let updated = query(SET_QUANTITY_SQL)
            .bind(user.into_uuid())
            .bind(food.into_uuid())
            .bind(try_to_pg_quantity(quantity)?)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(updated > 0)
    }

    /// Decrement a line's quantity if it is above one. Returns `false` when
    /// the line is absent or already at one.
    pub(crate) async fn decrement_line(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        food: FoodUuid,
    ) -> Result<bool, sqlx::Error> {
        let updated = query(DECREMENT_LINE_SQL)
            .bind(user.into_uuid())
            .bind(food.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(updated > 0)
    }

    /// Delete a line only if its quantity is exactly one.
    pub(crate) async fn delete_line_at_one(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        food: FoodUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_LINE_AT_ONE_SQL)
            .bind(user.into_uuid())
            .bind(food.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    /// Delete a line regardless of quantity.
    pub(crate) async fn delete_line(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        food: FoodUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_LINE_SQL)
            .bind(user.into_uuid())
            .bind(food.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for CartLine {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: CartLineUuid::from_uuid(row.try_get("uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            food: food_from_joined_row(row)?,
            quantity: try_get_quantity(row, "quantity")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

/// Decode the `food_`-prefixed columns of a joined cart line row.
fn food_from_joined_row(row: &PgRow) -> sqlx::Result<Food> {
    Ok(Food {
        uuid: FoodUuid::from_uuid(row.try_get("food_uuid")?),
        name: row.try_get("food_name")?,
        description: row.try_get("food_description")?,
        category: row.try_get("food_category")?,
        image: row.try_get("food_image")?,
        rating: row.try_get("food_rating")?,
        price: row.try_get::<Decimal, _>("food_price")?,
        discount_percent: try_get_discount(row, "food_discount_percent")?,
        created_at: row.try_get::<SqlxTimestamp, _>("food_created_at")?.to_jiff(),
        updated_at: row.try_get::<SqlxTimestamp, _>("food_updated_at")?.to_jiff(),
    })
}

/// Decode a quantity column through the validating type, so a row that
/// somehow violated the storage checks fails loudly at the boundary.
fn try_get_quantity(row: &PgRow, col: &str) -> Result<Quantity, sqlx::Error> {
    let raw: i32 = row.try_get(col)?;

    Quantity::try_from(raw).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

/// Convert a validated quantity back to the storage representation.
fn try_to_pg_quantity(quantity: Quantity) -> Result<i32, sqlx::Error> {
    i32::try_from(quantity.get()).map_err(|e| sqlx::Error::Encode(Box::new(e)))
}
