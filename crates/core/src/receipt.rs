//! Receipt

use std::io;

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::{
    discounts::DiscountPercent,
    money,
    pricing::{self, CartTotals, PricedLine, PricingError},
    quantities::Quantity,
};

/// Errors that can occur when building or rendering a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Totals could not be derived from the cart snapshot.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Writing the rendered receipt failed.
    #[error("failed to write receipt")]
    Io(#[from] io::Error),
}

/// One rendered line of the receipt.
#[derive(Debug, Clone)]
struct ReceiptRow {
    name: String,
    quantity: Quantity,
    unit_price: Decimal,
    discount: DiscountPercent,
    line_total: Decimal,
}

/// A rendered price breakdown for a cart snapshot.
///
/// Holds the per-line derivation alongside the cart totals so savings can be
/// reported against the undiscounted subtotal.
#[derive(Debug, Clone)]
pub struct Receipt {
    rows: Vec<ReceiptRow>,
    full_price_subtotal: Decimal,
    totals: CartTotals,
}

impl Receipt {
    /// Build a receipt from a cart snapshot.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError`] if the totals cannot be computed.
    pub fn from_lines(lines: &[PricedLine]) -> Result<Self, ReceiptError> {
        let totals = pricing::compute_totals(lines)?;

        let mut rows = Vec::with_capacity(lines.len());
        let mut full_price_subtotal = Decimal::ZERO;

        for line in lines {
            let derived = pricing::line_totals(line)?;

            let full_price = line
                .unit_price
                .checked_mul(Decimal::from(line.quantity.get()))
                .ok_or(PricingError::AmountOverflow)?;

            full_price_subtotal = full_price_subtotal
                .checked_add(full_price)
                .ok_or(PricingError::AmountOverflow)?;

            rows.push(ReceiptRow {
                name: line.name.clone(),
                quantity: line.quantity,
                unit_price: line.unit_price,
                discount: line.discount,
                line_total: derived.line_total,
            });
        }

        Ok(Self {
            rows,
            full_price_subtotal,
            totals,
        })
    }

    /// The cart totals this receipt was built from.
    #[must_use]
    pub fn totals(&self) -> &CartTotals {
        &self.totals
    }

    /// Amount saved through catalog discounts, relative to full prices.
    #[must_use]
    pub fn savings(&self) -> Decimal {
        self.full_price_subtotal
            .checked_sub(self.totals.subtotal)
            .unwrap_or(Decimal::ZERO)
    }

    /// Savings as a percentage of the undiscounted subtotal.
    #[must_use]
    pub fn savings_percent(&self) -> Percentage {
        if self.full_price_subtotal.is_zero() {
            return Percentage::from(Decimal::ZERO);
        }

        Percentage::from(self.savings() / self.full_price_subtotal)
    }

    /// Render the receipt as a table followed by the totals summary.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError::Io`] if writing fails.
    pub fn write_to<W: io::Write>(&self, writer: &mut W) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["Item", "Qty", "Unit", "Discount", "Total"]);

        for row in &self.rows {
            builder.push_record([
                row.name.clone(),
                row.quantity.to_string(),
                money::format_inr(row.unit_price),
                row.discount.to_string(),
                money::format_inr(row.line_total),
            ]);
        }

        let mut table = builder.build();

        table
            .with(Style::sharp())
            .modify(Columns::new(1..), Alignment::right());

        writeln!(writer, "{table}")?;
        writeln!(
            writer,
            "Subtotal      {}",
            money::format_inr(self.totals.subtotal)
        )?;
        writeln!(writer, "Tax (5%)      {}", money::format_inr(self.totals.tax))?;
        writeln!(
            writer,
            "Delivery fee  {}",
            money::format_inr(self.totals.delivery_fee)
        )?;
        writeln!(
            writer,
            "Total         {}",
            money::format_inr(self.totals.grand_total)
        )?;

        if !self.savings().is_zero() {
            writeln!(writer, "You saved     {}", money::format_inr(self.savings()))?;
        }

        Ok(())
    }
}
