//! # Argument Values and Output
//!
//! Command-line text becomes a [`Value`] by trying, in order: `true`/`false`,
//! a 64-bit integer, a float, and finally plain text. Results render either as
//! aligned text or as pretty JSON.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use tenum_core::Value;

/// How a subcommand prints its result.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Parse one command-line value.
pub fn parse_value(raw: &str) -> Value {
    match raw {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }
    if let Ok(int) = raw.parse::<i64>() {
        return Value::Int(int);
    }
    if let Ok(float) = raw.parse::<f64>() {
        return Value::Float(float);
    }
    Value::Text(raw.to_string())
}

/// Parse a comma-separated value list. Surrounding whitespace is trimmed
/// from each element.
pub fn parse_values(raw: &str) -> Vec<Value> {
    raw.split(',').map(|part| parse_value(part.trim())).collect()
}

/// Render `item` as pretty JSON.
pub fn to_json<T: Serialize + ?Sized>(item: &T) -> Result<String> {
    serde_json::to_string_pretty(item).context("serializing output")
}
