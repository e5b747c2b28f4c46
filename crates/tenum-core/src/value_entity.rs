//! # Value-Keyed Enumerations
//!
//! Instances carry one [`Value`] besides their id and can be looked up by
//! it. The text form of an instance is its value.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::entity::{Enumeration, Id};
use crate::value::Value;

/// An enumeration whose instances each carry one value.
pub trait ValueEnumeration: Enumeration {
    fn value(&self) -> &Value;

    /// First declared instance whose value equals `value` under strict
    /// cross-type equality.
    fn from_value(value: impl Into<Value>) -> Option<&'static Self> {
        let query = value.into();
        Self::all().iter().find(|e| e.value().same_as(&query))
    }
}

/// Base for value enumerations: an id plus one value.
///
/// Equality, ordering and hashing use the id only.
#[derive(Debug, Clone, Serialize)]
pub struct ValueEntity {
    id: Id,
    value: Value,
}

impl ValueEntity {
    pub fn new(id: impl Into<Id>, value: impl Into<Value>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl PartialEq for ValueEntity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ValueEntity {}

impl PartialOrd for ValueEntity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ValueEntity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl Hash for ValueEntity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for ValueEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Positions `(first, second)` of every repeated value, in declaration order.
pub(crate) fn duplicate_values<T: ValueEnumeration>(
    instances: &[T],
) -> Vec<(String, usize, usize)> {
    let mut duplicates = Vec::new();
    for (second, later) in instances.iter().enumerate() {
        if let Some(first) = instances[..second]
            .iter()
            .position(|earlier| earlier.value().same_as(later.value()))
        {
            duplicates.push((later.value().to_string(), first, second));
        }
    }
    duplicates
}

/// Reject value enumerations whose declared values are not unique.
///
/// # Errors
///
/// Returns [`TenumError::DuplicateValue`](crate::TenumError::DuplicateValue)
/// for the first repeated value.
pub fn validate_values<T: ValueEnumeration>() -> Result<(), crate::TenumError> {
    match duplicate_values(T::all()).into_iter().next() {
        Some((value, first, second)) => Err(crate::TenumError::DuplicateValue {
            type_name: std::any::type_name::<T>(),
            value,
            first,
            second,
        }),
        None => Ok(()),
    }
}
