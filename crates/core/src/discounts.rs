//! Discounts

use std::fmt;

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors specific to discount validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiscountError {
    /// The percentage was outside the valid `[0, 100]` range.
    #[error("discount percentage {0} is outside 0..=100")]
    OutOfRange(i64),
}

/// A whole-number discount percentage, validated into `[0, 100]` at
/// construction.
///
/// Catalog records carry the raw integer; going through this type is what
/// keeps an out-of-range discount from ever reaching the pricing math. The
/// database decode path uses [`TryFrom<i16>`], so bad catalog data surfaces
/// as a decode error rather than being silently clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DiscountPercent(u8);

impl DiscountPercent {
    /// No discount.
    pub const ZERO: Self = Self(0);

    /// Create a validated discount percentage.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::OutOfRange`] when `percent` is above 100.
    pub fn new(percent: u8) -> Result<Self, DiscountError> {
        if percent > 100 {
            return Err(DiscountError::OutOfRange(i64::from(percent)));
        }

        Ok(Self(percent))
    }

    /// The raw whole-number percentage.
    #[must_use]
    pub const fn percent(self) -> u8 {
        self.0
    }

    /// Whether this is a zero discount.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// The discount as an exact decimal fraction, e.g. `10` becomes `0.10`.
    #[must_use]
    pub fn fraction(self) -> Decimal {
        Decimal::new(i64::from(self.0), 2)
    }

    /// The discount as a [`Percentage`] for display-oriented math.
    #[must_use]
    pub fn percentage(self) -> Percentage {
        Percentage::from(self.fraction())
    }
}

impl TryFrom<i16> for DiscountPercent {
    type Error = DiscountError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        let percent =
            u8::try_from(value).map_err(|_invalid| DiscountError::OutOfRange(i64::from(value)))?;

        Self::new(percent)
    }
}

impl TryFrom<i64> for DiscountPercent {
    type Error = DiscountError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let percent = u8::try_from(value).map_err(|_invalid| DiscountError::OutOfRange(value))?;

        Self::new(percent)
    }
}

impl fmt::Display for DiscountPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn new_accepts_boundaries() -> TestResult {
        assert_eq!(DiscountPercent::new(0)?, DiscountPercent::ZERO);
        assert_eq!(DiscountPercent::new(100)?.percent(), 100);

        Ok(())
    }

    #[test]
    fn new_rejects_over_one_hundred() {
        assert_eq!(
            DiscountPercent::new(101),
            Err(DiscountError::OutOfRange(101))
        );
    }

    #[test]
    fn try_from_i16_rejects_negative() {
        assert_eq!(
            DiscountPercent::try_from(-1_i16),
            Err(DiscountError::OutOfRange(-1))
        );
    }

    #[test]
    fn try_from_i16_accepts_valid() -> TestResult {
        let discount = DiscountPercent::try_from(25_i16)?;

        assert_eq!(discount.percent(), 25);

        Ok(())
    }

    #[test]
    fn fraction_is_exact() -> TestResult {
        assert_eq!(DiscountPercent::new(10)?.fraction(), Decimal::new(10, 2));
        assert_eq!(DiscountPercent::new(100)?.fraction(), Decimal::ONE);
        assert_eq!(DiscountPercent::ZERO.fraction(), Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn display_includes_percent_sign() -> TestResult {
        assert_eq!(DiscountPercent::new(15)?.to_string(), "15%");

        Ok(())
    }
}
