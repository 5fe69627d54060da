//! Cart pricing
//!
//! Pure derivation of a cart's price breakdown from a snapshot of priced
//! lines. Nothing here is persisted; totals are recomputed from current
//! catalog values on every read, so they always reflect live prices.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{discounts::DiscountPercent, quantities::Quantity};

/// Flat tax rate applied to the discounted subtotal (5%).
#[must_use]
pub fn tax_rate() -> Decimal {
    Decimal::new(5, 2)
}

/// Metered delivery fee rate (2% of the subtotal).
#[must_use]
pub fn delivery_fee_rate() -> Decimal {
    Decimal::new(2, 2)
}

/// Minimum delivery fee in currency units, charged even on an empty cart.
#[must_use]
pub fn delivery_fee_minimum() -> Decimal {
    Decimal::from(50)
}

/// Errors that can occur while computing totals.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// An intermediate amount exceeded the representable decimal range.
    #[error("amount overflowed during totals computation")]
    AmountOverflow,
}

/// A cart snapshot entry: one line with its current catalog price joined in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedLine {
    /// Display name of the food.
    pub name: String,

    /// Current undiscounted unit price.
    pub unit_price: Decimal,

    /// Current catalog discount for the food.
    pub discount: DiscountPercent,

    /// Units of this food in the cart.
    pub quantity: Quantity,
}

/// The exact per-line price derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineTotals {
    /// Unit price after the catalog discount.
    pub discounted_unit_price: Decimal,

    /// Discounted unit price multiplied by the quantity.
    pub line_total: Decimal,
}

/// The ephemeral price breakdown for a whole cart. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    /// Sum of all line totals.
    pub subtotal: Decimal,

    /// Tax on the subtotal.
    pub tax: Decimal,

    /// Metered delivery fee, floored at [`delivery_fee_minimum`].
    pub delivery_fee: Decimal,

    /// Subtotal plus tax plus delivery fee.
    pub grand_total: Decimal,
}

/// Derive the discounted unit price and line total for a single line.
///
/// All arithmetic is exact; rounding belongs to the display step.
///
/// # Errors
///
/// Returns [`PricingError::AmountOverflow`] if an intermediate amount cannot
/// be represented.
pub fn line_totals(line: &PricedLine) -> Result<LineTotals, PricingError> {
    let discount_amount = line
        .unit_price
        .checked_mul(line.discount.fraction())
        .ok_or(PricingError::AmountOverflow)?;

    let discounted_unit_price = line
        .unit_price
        .checked_sub(discount_amount)
        .ok_or(PricingError::AmountOverflow)?;

    let line_total = discounted_unit_price
        .checked_mul(Decimal::from(line.quantity.get()))
        .ok_or(PricingError::AmountOverflow)?;

    Ok(LineTotals {
        discounted_unit_price,
        line_total,
    })
}

/// Compute the full price breakdown for a cart snapshot.
///
/// Deterministic and idempotent: the same lines always produce an identical
/// [`CartTotals`]. An empty snapshot yields a zero subtotal with the minimum
/// delivery fee still applied.
///
/// # Errors
///
/// Returns [`PricingError::AmountOverflow`] if any intermediate amount
/// cannot be represented.
pub fn compute_totals(lines: &[PricedLine]) -> Result<CartTotals, PricingError> {
    let mut subtotal = Decimal::ZERO;

    for line in lines {
        subtotal = subtotal
            .checked_add(line_totals(line)?.line_total)
            .ok_or(PricingError::AmountOverflow)?;
    }

    let tax = subtotal
        .checked_mul(tax_rate())
        .ok_or(PricingError::AmountOverflow)?;

    let metered_fee = subtotal
        .checked_mul(delivery_fee_rate())
        .ok_or(PricingError::AmountOverflow)?;

    let delivery_fee = metered_fee.max(delivery_fee_minimum());

    let grand_total = subtotal
        .checked_add(tax)
        .and_then(|amount| amount.checked_add(delivery_fee))
        .ok_or(PricingError::AmountOverflow)?;

    Ok(CartTotals {
        subtotal,
        tax,
        delivery_fee,
        grand_total,
    })
}
