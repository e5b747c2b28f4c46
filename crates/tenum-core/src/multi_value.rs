//! # Multi-Value-Keyed Enumerations
//!
//! Instances carry a fixed, ordered sequence of heterogeneous [`Value`]s.
//! Two reverse lookups are offered:
//!
//! | Lookup | Policy | `["a", 1]` vs declared `[1, "a"]` |
//! |--------|--------|-----------------------------------|
//! | [`MultiValueEnumeration::from_values`] | multiset | match |
//! | [`MultiValueEnumeration::from_values_ordered`] | positional | no match |
//!
//! Both require the query to have exactly as many elements as the
//! declaration. See [`crate::matching`].

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::entity::{Enumeration, Id};
use crate::matching::{multiset_matches, sequence_matches};
use crate::value::Value;

/// An enumeration whose instances each carry an ordered value sequence.
pub trait MultiValueEnumeration: Enumeration {
    fn values(&self) -> &[Value];

    /// First declared instance whose values equal the query as a multiset.
    fn from_values<I>(values: I) -> Option<&'static Self>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let query: Vec<Value> = values.into_iter().map(Into::into).collect();
        Self::all()
            .iter()
            .find(|e| multiset_matches(e.values(), &query))
    }

    /// First declared instance whose values equal the query position by
    /// position.
    fn from_values_ordered<I>(values: I) -> Option<&'static Self>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let query: Vec<Value> = values.into_iter().map(Into::into).collect();
        Self::all()
            .iter()
            .find(|e| sequence_matches(e.values(), &query))
    }
}

/// Base for multi-value enumerations: an id plus an ordered value sequence.
///
/// Equality, ordering, hashing and the text form use the id only.
#[derive(Debug, Clone, Serialize)]
pub struct MultiValueEntity {
    id: Id,
    values: Vec<Value>,
}

impl MultiValueEntity {
    pub fn new<I>(id: impl Into<Id>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self {
            id: id.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

impl PartialEq for MultiValueEntity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MultiValueEntity {}

impl PartialOrd for MultiValueEntity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MultiValueEntity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl Hash for MultiValueEntity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// The text form is the id, as for [`IdEntity`](crate::IdEntity).
impl fmt::Display for MultiValueEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.id, f)
    }
}
