//! Rule listing

use std::io::Write;

use cartwise::discounts::DiscountRule;
use clap::Args;

use crate::config::CatalogArgs;

use super::table;

/// Arguments for `rules`
#[derive(Debug, Args)]
pub(crate) struct RulesArgs {
    #[command(flatten)]
    catalog: CatalogArgs,
}

pub(super) fn run(args: &RulesArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let catalog = args.catalog.load()?;

    let rows = catalog
        .rules()
        .iter()
        .enumerate()
        .map(|(index, rule)| [index.to_string(), rule.name(), rule.description()])
        .collect();

    writeln!(out, "{}", table(["#", "Rule", "Description"], rows, 0..1))?;

    Ok(())
}
