//! Fixtures
//!
//! A small YAML-backed sample menu used by examples, tests, and catalog
//! seeding.

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    discounts::{DiscountError, DiscountPercent},
    pricing::PricedLine,
    quantities::Quantity,
};

/// Fixture parsing errors.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// YAML parsing error.
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid amount format.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Invalid discount format.
    #[error("invalid discount: {0}")]
    InvalidDiscount(String),

    /// Discount outside the valid range.
    #[error(transparent)]
    Discount(#[from] DiscountError),

    /// Food not found in the menu.
    #[error("food not found in menu: {0}")]
    FoodNotFound(String),
}

/// Wrapper for the menu in YAML.
#[derive(Debug, Deserialize)]
pub struct MenuFixture {
    /// Map of food key to food fixture.
    pub foods: FxHashMap<String, FoodFixture>,
}

impl MenuFixture {
    /// Look up a food by its fixture key.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::FoodNotFound`] if the key is absent.
    pub fn food(&self, key: &str) -> Result<&FoodFixture, FixtureError> {
        self.foods
            .get(key)
            .ok_or_else(|| FixtureError::FoodNotFound(key.to_string()))
    }

    /// Build a priced cart line for a food in the menu.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the key is absent or the food data is
    /// invalid.
    pub fn priced_line(&self, key: &str, quantity: Quantity) -> Result<PricedLine, FixtureError> {
        self.food(key)?.priced_line(quantity)
    }
}

/// Food fixture entry.
#[derive(Debug, Deserialize)]
pub struct FoodFixture {
    /// Display name.
    pub name: String,

    /// Menu category.
    pub category: String,

    /// Unit price (e.g. `"250.00"`).
    pub price: String,

    /// Discount (e.g. `"10%"`); absent means no discount.
    #[serde(default)]
    pub discount: Option<String>,

    /// Display rating in `[0, 5]`.
    #[serde(default)]
    pub rating: Option<f32>,

    /// Display description.
    #[serde(default)]
    pub description: Option<String>,

    /// Image reference.
    #[serde(default)]
    pub image: Option<String>,
}

impl FoodFixture {
    /// Parse the unit price.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::InvalidAmount`] if the price does not parse
    /// as a non-negative decimal.
    pub fn price(&self) -> Result<Decimal, FixtureError> {
        parse_amount(&self.price)
    }

    /// Parse the discount, defaulting to zero when absent.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the discount does not parse or is out
    /// of range.
    pub fn discount(&self) -> Result<DiscountPercent, FixtureError> {
        self.discount
            .as_deref()
            .map_or(Ok(DiscountPercent::ZERO), parse_discount)
    }

    /// Build a priced cart line for this food.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the price or discount is invalid.
    pub fn priced_line(&self, quantity: Quantity) -> Result<PricedLine, FixtureError> {
        Ok(PricedLine {
            name: self.name.clone(),
            unit_price: self.price()?,
            discount: self.discount()?,
            quantity,
        })
    }
}

/// Parse an amount string (e.g. `"250.00"`) into a non-negative decimal.
///
/// # Errors
///
/// Returns [`FixtureError::InvalidAmount`] if the string does not parse or
/// is negative.
pub fn parse_amount(s: &str) -> Result<Decimal, FixtureError> {
    let amount = s
        .trim()
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidAmount(s.to_string()))?;

    if amount.is_sign_negative() {
        return Err(FixtureError::InvalidAmount(s.to_string()));
    }

    Ok(amount)
}

/// Parse a discount string into a validated percentage.
///
/// Accepts `"15%"` or plain `"15"`.
///
/// # Errors
///
/// Returns a [`FixtureError`] if the string does not parse as a whole
/// number or the value is outside `[0, 100]`.
pub fn parse_discount(s: &str) -> Result<DiscountPercent, FixtureError> {
    let trimmed = s.trim();
    let digits = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();

    let percent = digits
        .parse::<u8>()
        .map_err(|_err| FixtureError::InvalidDiscount(s.to_string()))?;

    Ok(DiscountPercent::new(percent)?)
}

/// Parse a menu fixture from YAML.
///
/// # Errors
///
/// Returns [`FixtureError::Yaml`] if the document does not deserialize.
pub fn load_menu(yaml: &str) -> Result<MenuFixture, FixtureError> {
    Ok(serde_norway::from_str(yaml)?)
}

/// The bundled sample menu.
///
/// # Errors
///
/// Returns a [`FixtureError`] if the bundled document is malformed, which
/// would indicate a packaging defect.
pub fn sample_menu() -> Result<MenuFixture, FixtureError> {
    load_menu(include_str!("menu.yaml"))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parse_amount_accepts_decimals() -> TestResult {
        assert_eq!(parse_amount("250.00")?, Decimal::new(25000, 2));
        assert_eq!(parse_amount(" 60 ")?, Decimal::from(60));

        Ok(())
    }

    #[test]
    fn parse_amount_rejects_negative_and_garbage() {
        assert!(matches!(
            parse_amount("-5"),
            Err(FixtureError::InvalidAmount(_))
        ));
        assert!(matches!(
            parse_amount("cheap"),
            Err(FixtureError::InvalidAmount(_))
        ));
    }

    #[test]
    fn parse_discount_accepts_both_forms() -> TestResult {
        assert_eq!(parse_discount("15%")?.percent(), 15);
        assert_eq!(parse_discount("15")?.percent(), 15);
        assert_eq!(parse_discount(" 0% ")?.percent(), 0);

        Ok(())
    }

    #[test]
    fn parse_discount_rejects_out_of_range() {
        assert!(matches!(
            parse_discount("101%"),
            Err(FixtureError::Discount(DiscountError::OutOfRange(101)))
        ));
        assert!(matches!(
            parse_discount("ten"),
            Err(FixtureError::InvalidDiscount(_))
        ));
    }

    #[test]
    fn sample_menu_loads_and_prices() -> TestResult {
        let menu = sample_menu()?;

        assert!(!menu.foods.is_empty(), "sample menu should not be empty");

        for food in menu.foods.values() {
            let line = food.priced_line(Quantity::ONE)?;

            assert!(
                !line.unit_price.is_sign_negative(),
                "prices should be non-negative"
            );
        }

        Ok(())
    }

    #[test]
    fn unknown_food_key_is_an_error() -> TestResult {
        let menu = sample_menu()?;

        assert!(matches!(
            menu.food("not-on-the-menu"),
            Err(FixtureError::FoodNotFound(_))
        ));

        Ok(())
    }
}
