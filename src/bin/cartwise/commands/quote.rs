//! Quote

use std::{io::Write, str::FromStr};

use cartwise::{cart::Cart, items::LineItem};
use clap::Args;
use rust_decimal::Decimal;
use tracing::info;

use crate::config::CatalogArgs;

/// A catalog product name with an optional quantity, written `NAME` or `NAME=QTY`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ItemArg {
    name: String,
    quantity: u32,
}

impl FromStr for ItemArg {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (name, quantity) = match value.rsplit_once('=') {
            Some((name, quantity)) => {
                let quantity = quantity
                    .trim()
                    .parse::<u32>()
                    .map_err(|error| format!("invalid quantity `{quantity}`: {error}"))?;

                (name, quantity)
            }
            None => (value, 1),
        };

        Ok(Self {
            name: name.trim().to_string(),
            quantity,
        })
    }
}

/// Arguments for `quote`
#[derive(Debug, Args)]
pub(crate) struct QuoteArgs {
    /// Product to add, as `NAME` or `NAME=QTY` (repeatable)
    #[arg(short, long = "item")]
    items: Vec<ItemArg>,

    /// Position of the catalog rule to apply (see `rules`)
    #[arg(short, long, default_value_t = 0)]
    rule: usize,

    /// Tax rate in percent (e.g. `8.5`)
    #[arg(short, long)]
    tax: Option<Decimal>,

    #[command(flatten)]
    catalog: CatalogArgs,
}

/// Build the cart, apply the rule and print the summary.
pub(super) fn run(args: &QuoteArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let catalog = args.catalog.load()?;

    let mut cart = Cart::with_rule(catalog.rule(args.rule)?.clone());

    for item in &args.items {
        let product = catalog.product(&item.name)?;

        cart.add_item(LineItem::new(
            product.name(),
            product.unit_price(),
            product.category(),
            item.quantity,
        )?);
    }

    info!(
        items = cart.item_count(),
        rule = %cart.rule().name(),
        "quote ready"
    );

    cart.summary().write_to(&mut *out, args.tax)?;

    Ok(())
}
