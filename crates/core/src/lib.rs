//! Foodio
//!
//! Foodio is the pricing core of a food-delivery storefront: exact decimal
//! discount arithmetic, cart totals (tax and delivery fee included), and
//! receipt rendering.
//!
//! All intermediate arithmetic is exact [`rust_decimal`] math; rounding to the
//! currency's minor-unit precision happens only at the display step, via
//! [`money::to_display`].

pub mod discounts;
pub mod fixtures;
pub mod money;
pub mod prelude;
pub mod pricing;
pub mod quantities;
pub mod receipt;
