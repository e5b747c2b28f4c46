//! # Error Types
//!
//! Lookups in this crate never fail: a query with no matching instance is
//! `None`. The errors here only come out of the explicit validation entry
//! points ([`crate::validate`], [`crate::validate_values`]), which callers
//! run when they want declaration mistakes to be loud.

use thiserror::Error;

use crate::entity::Id;

/// Top-level error type for tenum.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TenumError {
    /// Two instances of one enumeration share an id.
    #[error(
        "duplicate id {id} in enumeration {type_name}: declared at positions {first} and {second}"
    )]
    DuplicateId {
        /// Fully qualified name of the enumeration type.
        type_name: &'static str,
        /// The repeated id.
        id: Id,
        /// Declaration position of the instance lookups resolve to.
        first: usize,
        /// Declaration position of the shadowed instance.
        second: usize,
    },

    /// Two instances of one value enumeration carry equal values.
    #[error(
        "duplicate value {value} in enumeration {type_name}: declared at positions {first} and {second}"
    )]
    DuplicateValue {
        /// Fully qualified name of the enumeration type.
        type_name: &'static str,
        /// Text form of the repeated value.
        value: String,
        /// Declaration position of the instance lookups resolve to.
        first: usize,
        /// Declaration position of the shadowed instance.
        second: usize,
    },
}
