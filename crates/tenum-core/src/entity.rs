//! # Id-Keyed Enumerations
//!
//! An enumeration is a closed set of singleton instances of one concrete
//! type. The type declares its instances once, in order, through
//! [`Enumeration::declare`]; the [`Registry`](crate::Registry) materialises
//! them on first access and hands out `&'static` references from then on.
//!
//! ## Lookup Contract
//!
//! - [`Enumeration::all`] returns instances in declaration order, every time.
//! - [`Enumeration::from_id`] returns the *first* declared instance with the
//!   id, or `None`. Absence is ordinary data, never an error.
//! - Ids are not checked for uniqueness at build time. A duplicate shadows
//!   the later declaration; the registry logs a warning and [`validate`]
//!   turns it into an error for callers that want one.
//!
//! ## Identity
//!
//! [`IdEntity`] (and the value-carrying bases built on the same rule) compare
//! and order by id alone. Types declared with the `enumeration!` macro wrap
//! a base struct, so derived `PartialEq`/`Ord` inherit the rule.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TenumError;
use crate::registry::Registry;
use crate::value::EntityRef;

/// Integer identifier of an enumeration instance.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Id(pub i64);

impl Id {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for Id {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<i32> for Id {
    fn from(id: i32) -> Self {
        Self(i64::from(id))
    }
}

impl From<u32> for Id {
    fn from(id: u32) -> Self {
        Self(i64::from(id))
    }
}

impl From<u16> for Id {
    fn from(id: u16) -> Self {
        Self(i64::from(id))
    }
}

impl From<u8> for Id {
    fn from(id: u8) -> Self {
        Self(i64::from(id))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A closed set of singleton instances of `Self`.
pub trait Enumeration: Sized + Send + Sync + 'static {
    /// Every instance, in declaration order.
    ///
    /// Called at most once per type and registry. Must not look up `Self`
    /// (use [`Value::entity`](crate::Value::entity) to refer to a sibling
    /// instance); looking up *other* enumerations is fine.
    fn declare() -> Vec<Self>;

    fn id(&self) -> Id;

    /// Every instance, in declaration order.
    fn all() -> &'static [Self] {
        Registry::global().instances::<Self>()
    }

    /// First declared instance with `id`.
    fn from_id(id: impl Into<Id>) -> Option<&'static Self> {
        let id = id.into();
        Self::all().iter().find(|e| e.id() == id)
    }

    /// Typed reference to this instance, for use as a [`Value`](crate::Value).
    fn entity_ref(&self) -> EntityRef {
        EntityRef::of::<Self>(self.id())
    }
}

/// Base for id-only enumerations. Equality, ordering and hashing use the id;
/// the text form is the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct IdEntity {
    id: Id,
}

impl IdEntity {
    pub fn new(id: impl Into<Id>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> Id {
        self.id
    }
}

impl fmt::Display for IdEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Positions `(first, second)` of every repeated id, in declaration order.
pub(crate) fn duplicate_ids<T: Enumeration>(instances: &[T]) -> Vec<(Id, usize, usize)> {
    let mut duplicates = Vec::new();
    for (second, later) in instances.iter().enumerate() {
        if let Some(first) = instances[..second]
            .iter()
            .position(|earlier| earlier.id() == later.id())
        {
            duplicates.push((later.id(), first, second));
        }
    }
    duplicates
}

/// Reject enumerations whose declared ids are not unique.
///
/// Lookups keep working either way (first declaration wins); this is an
/// opt-in check for tests and start-up assertions.
///
/// # Errors
///
/// Returns [`TenumError::DuplicateId`] for the first repeated id.
pub fn validate<T: Enumeration>() -> Result<(), TenumError> {
    match duplicate_ids(T::all()).first() {
        Some(&(id, first, second)) => Err(TenumError::DuplicateId {
            type_name: std::any::type_name::<T>(),
            id,
            first,
            second,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
    struct Level(IdEntity);

    impl Enumeration for Level {
        fn declare() -> Vec<Self> {
            vec![Level(IdEntity::new(10)), Level(IdEntity::new(20)), Level(IdEntity::new(30))]
        }

        fn id(&self) -> Id {
            self.0.id()
        }
    }

    #[derive(Debug)]
    struct Clashing(IdEntity, &'static str);

    impl Enumeration for Clashing {
        fn declare() -> Vec<Self> {
            vec![
                Clashing(IdEntity::new(1), "first"),
                Clashing(IdEntity::new(2), "other"),
                Clashing(IdEntity::new(1), "shadowed"),
            ]
        }

        fn id(&self) -> Id {
            self.0.id()
        }
    }

    #[test]
    fn test_all_in_declaration_order() {
        let ids: Vec<i64> = Level::all().iter().map(|l| l.id().get()).collect();
        assert_eq!(ids, vec![10, 20, 30]);
    }

    #[test]
    fn test_from_id_roundtrip() {
        for level in Level::all() {
            assert_eq!(Level::from_id(level.id()), Some(level));
        }
        assert!(Level::from_id(15).is_none());
    }

    #[test]
    fn test_equality_and_ordering_follow_id() {
        let [low, mid, high] = [&Level::all()[0], &Level::all()[1], &Level::all()[2]];
        assert_eq!(low, &Level(IdEntity::new(10)));
        assert_ne!(low, mid);
        assert_eq!(low.cmp(mid), Ordering::Less);
        assert_eq!(high.cmp(mid), Ordering::Greater);
        assert_eq!(mid.cmp(mid), Ordering::Equal);
    }

    #[test]
    fn test_comparison_with_absent() {
        let low = Level::from_id(10);
        assert_ne!(low, None);
        assert_ne!(low.cmp(&None), Ordering::Equal);
    }

    #[test]
    fn test_text_form_is_id() {
        assert_eq!(IdEntity::new(42).to_string(), "42");
        assert_eq!(Id::new(-3).to_string(), "-3");
    }

    #[test]
    fn test_duplicate_ids_resolve_to_first() {
        let found = Clashing::from_id(1).map(|c| c.1);
        assert_eq!(found, Some("first"));
        assert_eq!(Clashing::all().len(), 3);
    }

    #[test]
    fn test_validate() {
        assert!(validate::<Level>().is_ok());
        match validate::<Clashing>() {
            Err(TenumError::DuplicateId { id, first, second, .. }) => {
                assert_eq!(id, Id(1));
                assert_eq!((first, second), (0, 2));
            }
            other => panic!("expected DuplicateId, got {other:?}"),
        }
    }

    #[test]
    fn test_entity_ref_points_back() {
        let mid = &Level::all()[1];
        let r = mid.entity_ref();
        assert_eq!(r.id(), Id(20));
        assert_eq!(r.resolve::<Level>(), Some(mid));
        assert_eq!(r.resolve::<Clashing>().map(|c| c.1), None);
    }
}
