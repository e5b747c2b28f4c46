//! # Classify Subcommand
//!
//! Runs one value through a [`CaseTable`] built from the catalogue. Every
//! declared value (and every weekday id) becomes a literal arm; unmatched
//! queries fall back to `unclassified`. A second table of quoted expressions,
//! dispatched on `true`, names the variant of the query.
//!
//! Matching is strict: `2` hits the currencies with two minor units and
//! Tuesday, while `2.0` and `"2"` hit nothing.

use anyhow::Result;
use clap::Args;
use parking_lot::Mutex;
use serde::Serialize;
use tenum_core::{Enumeration, MultiValueEnumeration, Value, ValueEnumeration};
use tenum_dispatch::{expr, CaseTable, MatchMode};

use crate::catalog::{CatalogName, Currency, HttpStatus, Weekday};
use crate::output::{parse_value, to_json, OutputFormat};

/// Arguments for the classify subcommand.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Value to classify (bool, integer, float, or text).
    pub value: String,

    /// Report every matching arm instead of the first.
    #[arg(long)]
    pub all: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Which arms fired for one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub query: Value,
    pub shape: &'static str,
    pub mode: MatchMode,
    pub hits: Vec<String>,
    pub fell_back: bool,
}

/// Execute the classify subcommand.
pub fn run_classify(args: &ClassifyArgs) -> Result<u8> {
    let mode = if args.all { MatchMode::All } else { MatchMode::First };
    let result = classify(parse_value(&args.value), mode)?;
    match args.format {
        OutputFormat::Json => println!("{}", to_json(&result)?),
        OutputFormat::Text => {
            println!("{} ({})", result.query, result.shape);
            for hit in &result.hits {
                println!("  {hit}");
            }
        }
    }
    Ok(0)
}

/// Classify `query` against the catalogue.
pub fn classify(query: Value, mode: MatchMode) -> Result<Classification> {
    let hits = Mutex::new(Vec::new());
    let record = |label: String| {
        let hits = &hits;
        move || hits.lock().push(label.clone())
    };

    let mut builder = CaseTable::builder();
    for status in HttpStatus::all() {
        let label = hit(CatalogName::HttpStatus, status);
        builder = builder.case(status.value().clone(), record(label));
    }
    for currency in Currency::all() {
        for value in currency.values() {
            builder = builder.case(value.clone(), record(hit(CatalogName::Currency, currency)));
        }
    }
    for day in Weekday::all() {
        builder = builder.case(day.id().get(), record(hit(CatalogName::Weekday, day)));
    }
    let table: CaseTable = builder.otherwise(record("unclassified".to_string())).build()?;

    let outcome = match table.dispatch(&query, mode) {
        Ok(outcome) => outcome,
        Err(never) => match never {},
    };
    let arms = table.len();
    drop(table);
    let hits = hits.into_inner();

    let shape = shape_of(&query)?;
    tracing::info!(query = %query, shape, arms, hits = hits.len(), "classified");
    Ok(Classification {
        query,
        shape,
        mode,
        hits,
        fell_back: outcome.fell_back,
    })
}

/// Describe the variant of `query` with a first-match table over quoted
/// expressions, dispatched on `true`.
fn shape_of(query: &Value) -> Result<&'static str> {
    let shape = Mutex::new("other");
    let set = |name: &'static str| {
        let shape = &shape;
        move || *shape.lock() = name
    };
    let table: CaseTable = CaseTable::builder()
        .candidate(expr!(query.is_null()), set("null"))
        .candidate(expr!(query.as_bool().is_some()), set("bool"))
        .candidate(expr!(query.as_int().is_some()), set("integer"))
        .candidate(expr!(query.as_float().is_some()), set("float"))
        .candidate(expr!(query.as_str().is_some()), set("text"))
        .build()?;
    table.run_first(true);
    drop(table);
    Ok(shape.into_inner())
}

fn hit<T: Enumeration>(name: CatalogName, instance: &T) -> String {
    format!("{name} #{}", instance.id())
}
