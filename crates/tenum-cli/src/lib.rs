//! # tenum-cli — Enumeration Catalogue Explorer
//!
//! A small clap-based front end that exercises `tenum-core` lookups and
//! `tenum-dispatch` case tables against a built-in catalogue.
//!
//! ## Subcommands
//!
//! - `list` — every instance of an enumeration, in declaration order
//! - `lookup` — reverse lookup by id, value, or value list
//! - `classify` — case-table dispatch of one value over the catalogue
//! - `stats` — what the global registry has built so far
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs` and the `*Args` structs; handlers
//!   return an exit code and leave printing of errors to `main`.
//! - Command-line values are parsed once, in [`output::parse_value`].

pub mod catalog;
pub mod classify;
pub mod list;
pub mod lookup;
pub mod output;
pub mod stats;
