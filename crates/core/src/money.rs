//! Money display helpers
//!
//! The pricing pipeline keeps every intermediate amount exact; only here,
//! at the display boundary, do amounts get rounded to the currency's
//! minor-unit precision.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, iso};

/// Round an exact amount to two decimal places for display, midpoints away
/// from zero.
#[must_use]
pub fn to_display(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Render an amount as a plain two-decimal string, e.g. `"50.00"`.
#[must_use]
pub fn to_display_string(amount: Decimal) -> String {
    format!("{:.2}", to_display(amount))
}

/// Format a display-rounded amount as Indian rupees, e.g. `₹1,234.50`.
#[must_use]
pub fn format_inr(amount: Decimal) -> String {
    Money::from_decimal(to_display(amount), iso::INR).to_string()
}

/// Convert an amount to minor units (paise), rounding for display first.
///
/// Returns `None` when the amount does not fit in an `i64` of minor units.
#[must_use]
pub fn to_minor_units(amount: Decimal) -> Option<i64> {
    to_display(amount)
        .checked_mul(Decimal::ONE_HUNDRED)?
        .to_i64()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_display_rounds_half_away_from_zero() {
        assert_eq!(to_display(Decimal::new(12345, 3)), Decimal::new(1235, 2));
        assert_eq!(to_display(Decimal::new(-12345, 3)), Decimal::new(-1235, 2));
    }

    #[test]
    fn to_display_preserves_two_dp_amounts() {
        assert_eq!(to_display(Decimal::new(9050, 2)), Decimal::new(9050, 2));
    }

    #[test]
    fn to_display_string_pads_whole_amounts() {
        assert_eq!(to_display_string(Decimal::from(50)), "50.00");
        assert_eq!(to_display_string(Decimal::ZERO), "0.00");
        assert_eq!(to_display_string(Decimal::new(89991, 3)), "89.99");
    }

    #[test]
    fn format_inr_uses_rupee_symbol() {
        assert_eq!(format_inr(Decimal::from(90)), "₹90.00");
    }

    #[test]
    fn to_minor_units_converts_paise() {
        assert_eq!(to_minor_units(Decimal::new(14450, 2)), Some(14450));
        assert_eq!(to_minor_units(Decimal::MAX), None);
    }
}
