//! # tenum-core — Typed-Constant Enumerations
//!
//! Closed sets of singleton instances with reverse lookup, in three
//! escalating kinds:
//!
//! | Kind | Trait | Base struct | Extra lookup |
//! |------|-------|-------------|--------------|
//! | id-keyed | [`Enumeration`] | [`IdEntity`] | `from_id` |
//! | value-keyed | [`ValueEnumeration`] | [`ValueEntity`] | `from_value` |
//! | multi-value-keyed | [`MultiValueEnumeration`] | [`MultiValueEntity`] | `from_values`, `from_values_ordered` |
//!
//! ## Key Design Principles
//!
//! 1. **Explicit declaration.** A type lists its instances in
//!    [`Enumeration::declare`] (or through [`enumeration!`]); the
//!    [`Registry`] builds each type once, on first access, and every lookup
//!    afterwards reads the same immutable `&'static` slice.
//!
//! 2. **One equality.** Every comparison between a query and a declared
//!    value goes through [`Value::same_as`]: same variant, equal content, no
//!    coercion. `20.0` never equals `20`, `"20"`, or `true`.
//!
//! 3. **Absence is data.** Lookups return `Option`. Nothing in the lookup
//!    path returns an error or panics.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `tenum-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod entity;
pub mod error;
mod macros;
pub mod matching;
pub mod multi_value;
pub mod registry;
pub mod value;
pub mod value_entity;

// Re-export primary types for ergonomic imports.
pub use entity::{validate, Enumeration, Id, IdEntity};
pub use error::TenumError;
pub use multi_value::{MultiValueEntity, MultiValueEnumeration};
pub use registry::Registry;
pub use value::{values_equal, EntityRef, Value};
pub use value_entity::{validate_values, ValueEntity, ValueEnumeration};
