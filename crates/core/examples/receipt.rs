//! Render a receipt for a cart built from the bundled sample menu.

use anyhow::Result;
use clap::Parser;
use foodio::{fixtures, quantities::Quantity, receipt::Receipt};

/// Arguments for the receipt example
#[derive(Debug, Parser)]
struct Args {
    /// Quantity of every sampled menu entry
    #[clap(short, long, default_value_t = 1)]
    quantity: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let menu = fixtures::sample_menu()?;
    let quantity = Quantity::new(args.quantity)?;

    let mut lines = Vec::with_capacity(menu.foods.len());

    for food in menu.foods.values() {
        lines.push(food.priced_line(quantity)?);
    }

    lines.sort_by(|a, b| a.name.cmp(&b.name));

    let receipt = Receipt::from_lines(&lines)?;

    receipt.write_to(&mut std::io::stdout().lock())?;

    Ok(())
}
