//! Foods Repository

use foodio::discounts::DiscountPercent;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::foods::models::{Food, FoodUuid, NewFood};

const LIST_FOODS_SQL: &str = include_str!("sql/list_foods.sql");
const GET_FOOD_SQL: &str = include_str!("sql/get_food.sql");
const CREATE_FOOD_SQL: &str = include_str!("sql/create_food.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgFoodsRepository;

impl PgFoodsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_foods(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<Food>, sqlx::Error> {
        query_as::<Postgres, Food>(LIST_FOODS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_food(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        food: FoodUuid,
    ) -> Result<Food, sqlx::Error> {
        query_as::<Postgres, Food>(GET_FOOD_SQL)
            .bind(food.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_food(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        food: NewFood,
    ) -> Result<Food, sqlx::Error> {
        query_as::<Postgres, Food>(CREATE_FOOD_SQL)
            .bind(food.uuid.into_uuid())
            .bind(food.name)
            .bind(food.description)
            .bind(food.category)
            .bind(food.image)
            .bind(food.rating)
            .bind(food.price)
            .bind(i16::from(food.discount_percent.percent()))
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Food {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: FoodUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            category: row.try_get("category")?,
            image: row.try_get("image")?,
            rating: row.try_get("rating")?,
            price: row.try_get::<Decimal, _>("price")?,
            discount_percent: try_get_discount(row, "discount_percent")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

/// Decode a discount column through the validating type so out-of-range
/// catalog data surfaces as a decode error rather than being clamped.
pub(crate) fn try_get_discount(row: &PgRow, col: &str) -> Result<DiscountPercent, sqlx::Error> {
    let raw: i16 = row.try_get(col)?;

    DiscountPercent::try_from(raw).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}
