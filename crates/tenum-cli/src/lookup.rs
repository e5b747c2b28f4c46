//! # Lookup Subcommand
//!
//! Reverse lookup by id, single value, or value list. Exits with status 1
//! when no instance matches.

use anyhow::Result;
use clap::Args;
use tenum_core::Id;

use crate::catalog::{CatalogName, Row};
use crate::list::render_rows;
use crate::output::{parse_value, parse_values, OutputFormat};

/// Arguments for the lookup subcommand.
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Enumeration to search.
    #[arg(value_enum)]
    pub enumeration: CatalogName,

    /// Look up by id.
    #[arg(
        long,
        conflicts_with_all = ["value", "values"],
        required_unless_present_any = ["value", "values"]
    )]
    pub id: Option<i64>,

    /// Look up by single value (bool, integer, float, or text).
    #[arg(long, conflicts_with = "values")]
    pub value: Option<String>,

    /// Look up by comma-separated value list.
    #[arg(long)]
    pub values: Option<String>,

    /// With --values, require the declared order.
    #[arg(long, requires = "values")]
    pub ordered: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute the lookup subcommand.
pub fn run_lookup(args: &LookupArgs) -> Result<u8> {
    match lookup(args)? {
        Some(row) => {
            println!("{}", render_rows(std::slice::from_ref(&row), args.format)?);
            Ok(0)
        }
        None => {
            eprintln!("no {} instance matches", args.enumeration);
            Ok(1)
        }
    }
}

/// Resolve the query described by `args`.
pub fn lookup(args: &LookupArgs) -> Result<Option<Row>> {
    let name = args.enumeration;
    let found = if let Some(id) = args.id {
        name.by_id(Id(id))
    } else if let Some(raw) = &args.value {
        name.by_value(parse_value(raw))?
    } else if let Some(raw) = &args.values {
        name.by_values(parse_values(raw), args.ordered)?
    } else {
        anyhow::bail!("one of --id, --value or --values is required");
    };
    tracing::debug!(enumeration = %name, found = found.is_some(), "lookup");
    Ok(found)
}
