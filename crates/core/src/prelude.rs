//! Foodio prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    discounts::{DiscountError, DiscountPercent},
    fixtures::{FixtureError, FoodFixture, MenuFixture},
    money,
    pricing::{CartTotals, LineTotals, PricedLine, PricingError, compute_totals, line_totals},
    quantities::{Quantity, QuantityError},
    receipt::{Receipt, ReceiptError},
};
