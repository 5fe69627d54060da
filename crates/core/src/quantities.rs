//! Quantities

use std::fmt;

use thiserror::Error;

/// Errors specific to quantity validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuantityError {
    /// The value was zero, negative, or out of range.
    #[error("quantity must be a positive integer, got {0}")]
    NotPositive(i64),
}

/// A cart line quantity, always at least one.
///
/// A line whose quantity would drop to zero is deleted, never persisted; this
/// type makes the "never zero" half of that invariant unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(u32);

impl Quantity {
    /// A quantity of exactly one.
    pub const ONE: Self = Self(1);

    /// Create a validated quantity.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::NotPositive`] when `value` is zero.
    pub const fn new(value: u32) -> Result<Self, QuantityError> {
        if value == 0 {
            return Err(QuantityError::NotPositive(0));
        }

        Ok(Self(value))
    }

    /// The underlying count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<i32> for Quantity {
    type Error = QuantityError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        let value =
            u32::try_from(value).map_err(|_invalid| QuantityError::NotPositive(i64::from(value)))?;

        Self::new(value)
    }
}

impl TryFrom<i64> for Quantity {
    type Error = QuantityError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let value = u32::try_from(value).map_err(|_invalid| QuantityError::NotPositive(value))?;

        Self::new(value)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
