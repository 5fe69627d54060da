//! Food Models

use foodio::discounts::DiscountPercent;
use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::uuids::TypedUuid;

/// Food UUID
pub type FoodUuid = TypedUuid<Food>;

/// Food Model
///
/// A catalog record. Mutable by the catalog owner; the cart core only reads
/// it, so prices and discounts seen at pricing time are always the live
/// values, not a snapshot from when the line was added.
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    pub uuid: FoodUuid,
    pub name: String,
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating: f32,
    pub price: Decimal,
    pub discount_percent: DiscountPercent,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// New Food Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewFood {
    pub uuid: FoodUuid,
    pub name: String,
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating: f32,
    pub price: Decimal,
    pub discount_percent: DiscountPercent,
}
