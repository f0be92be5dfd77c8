//! Subcommands

use std::{io::Write, ops::Range};

use clap::Subcommand;
use tabled::{
    Table,
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

mod demo;
mod quote;
mod rules;

/// Available subcommands
#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Replay the discount rule demonstration
    Demo,

    /// Price a cart built from catalog products
    Quote(quote::QuoteArgs),

    /// List the catalog's discount rules
    Rules(rules::RulesArgs),
}

impl Commands {
    /// Run the command, writing its output to `out`.
    pub(crate) fn run(&self, out: &mut impl Write) -> anyhow::Result<()> {
        match self {
            Commands::Demo => demo::run(out),
            Commands::Quote(args) => quote::run(args, out),
            Commands::Rules(args) => rules::run(args, out),
        }
    }
}

/// Build a rounded table, right-aligning the `numeric` columns.
fn table<const N: usize>(header: [&str; N], rows: Vec<[String; N]>, numeric: Range<usize>) -> Table {
    let mut builder = Builder::default();

    builder.push_record(header);

    for row in rows {
        builder.push_record(row);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(numeric), Alignment::right());

    table
}
