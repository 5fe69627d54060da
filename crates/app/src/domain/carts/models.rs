//! Cart Models

use foodio::quantities::Quantity;
use jiff::Timestamp;

use crate::{domain::foods::models::Food, uuids::TypedUuid};

/// Marker for user identities, which live outside this system.
///
/// The cart trusts an opaque, pre-validated user UUID supplied by the
/// caller; it performs no authentication itself.
#[derive(Debug, Clone, Copy)]
pub struct User;

/// User UUID
pub type UserUuid = TypedUuid<User>;

/// Cart Line UUID
pub type CartLineUuid = TypedUuid<CartLine>;

/// Cart Line Model
///
/// One persisted (user, food) pair with a quantity, returned with its food
/// joined in so callers can display and price it without a second read.
/// At most one line exists per pair, and its quantity is always at least
/// one; a line that would reach zero is deleted instead.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub uuid: CartLineUuid,
    pub user_uuid: UserUuid,
    pub food: Food,
    pub quantity: Quantity,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
