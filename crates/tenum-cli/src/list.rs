//! # List Subcommand
//!
//! Prints every instance of one catalogue enumeration in declaration order.

use anyhow::Result;
use clap::Args;

use crate::catalog::{CatalogName, Row};
use crate::output::{to_json, OutputFormat};

/// Arguments for the list subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Enumeration to list.
    #[arg(value_enum)]
    pub enumeration: CatalogName,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute the list subcommand.
pub fn run_list(args: &ListArgs) -> Result<u8> {
    let rows = args.enumeration.rows();
    tracing::debug!(enumeration = %args.enumeration, count = rows.len(), "listing");
    println!("{}", render_rows(&rows, args.format)?);
    Ok(0)
}

pub fn render_rows(rows: &[Row], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(rows),
        OutputFormat::Text => Ok(rows
            .iter()
            .map(Row::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
