//! # Registry — Build-Once Instance Cache
//!
//! Maps each enumeration type to its ordered, immutable instance slice.
//!
//! ## Build Discipline
//!
//! The map holds one leaked `OnceLock<&'static [T]>` slot per `TypeId`.
//! Finding the slot is double-checked (shared read lock, then exclusive
//! write lock with a re-check on miss). Filling it happens through the slot's
//! own `OnceLock`, outside the map lock, so:
//!
//! - `T::declare()` runs exactly once even under concurrent first access;
//!   racing callers block until the slice is complete and never observe a
//!   partial build.
//! - A `declare()` that reads another enumeration re-enters the registry
//!   without deadlocking.
//!
//! Slices are leaked: instances live for the rest of the process
//! and lookups return `&'static` references into them.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::OnceLock;

use parking_lot::RwLock;

use crate::entity::{duplicate_ids, Enumeration};

type Slot<T> = OnceLock<&'static [T]>;

/// Per-type cache of declared enumeration instances.
///
/// The only instance outside this crate is [`Registry::global`]; slots and
/// slices are leaked, so a registry never gives its memory back.
///
/// ```compile_fail
/// let private = tenum_core::Registry::new();
/// ```
///
/// ```
/// use tenum_core::Registry;
///
/// assert!(std::ptr::eq(Registry::global(), Registry::global()));
/// ```
pub struct Registry {
    slots: RwLock<HashMap<TypeId, &'static (dyn Any + Send + Sync)>>,
}

impl Registry {
    /// Empty registry. Everything it builds is leaked.
    pub(crate) fn new() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
        }
    }

    /// The process-wide registry behind [`Enumeration::all`].
    pub fn global() -> &'static Registry {
        static GLOBAL: OnceLock<Registry> = OnceLock::new();
        GLOBAL.get_or_init(Registry::new)
    }

    /// Instances of `T` in declaration order, building them on first call.
    pub fn instances<T: Enumeration>(&self) -> &'static [T] {
        self.slot::<T>().get_or_init(build::<T>)
    }

    /// Whether `T` has been materialised in this registry.
    pub fn is_built<T: Enumeration>(&self) -> bool {
        self.slots
            .read()
            .get(&TypeId::of::<T>())
            .copied()
            .and_then(|slot| slot.downcast_ref::<Slot<T>>())
            .is_some_and(|slot| slot.get().is_some())
    }

    /// Number of enumeration types this registry has seen.
    pub fn len(&self) -> usize {
        self.slots.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.read().is_empty()
    }

    fn slot<T: Enumeration>(&self) -> &'static Slot<T> {
        let key = TypeId::of::<T>();

        if let Some(slot) = self
            .slots
            .read()
            .get(&key)
            .copied()
            .and_then(|slot| slot.downcast_ref::<Slot<T>>())
        {
            return slot;
        }

        let mut slots = self.slots.write();
        // Another thread may have inserted the slot between the two locks.
        if let Some(slot) = slots
            .get(&key)
            .copied()
            .and_then(|slot| slot.downcast_ref::<Slot<T>>())
        {
            return slot;
        }
        let slot: &'static Slot<T> = Box::leak(Box::new(OnceLock::new()));
        slots.insert(key, slot);
        slot
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry").field("types", &self.len()).finish()
    }
}

fn build<T: Enumeration>() -> &'static [T] {
    let type_name = std::any::type_name::<T>();
    let instances = T::declare();

    for (id, first, second) in duplicate_ids(&instances) {
        tracing::warn!(
            enumeration = type_name,
            %id,
            first,
            second,
            "duplicate enumeration id; lookups resolve to the first declaration"
        );
    }
    tracing::debug!(enumeration = type_name, count = instances.len(), "enumeration built");

    Box::leak(instances.into_boxed_slice())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::entity::{Id, IdEntity};

    static DECLARED: AtomicUsize = AtomicUsize::new(0);

    struct Counted(IdEntity);

    impl Enumeration for Counted {
        fn declare() -> Vec<Self> {
            DECLARED.fetch_add(1, Ordering::SeqCst);
            vec![Counted(IdEntity::new(1)), Counted(IdEntity::new(2))]
        }

        fn id(&self) -> Id {
            self.0.id()
        }
    }

    struct Outer(IdEntity);

    impl Enumeration for Outer {
        fn declare() -> Vec<Self> {
            // Reads another enumeration while this one is being built.
            Inner::all()
                .iter()
                .map(|inner| Outer(IdEntity::new(inner.id().get() * 100)))
                .collect()
        }

        fn id(&self) -> Id {
            self.0.id()
        }
    }

    struct Inner(IdEntity);

    impl Enumeration for Inner {
        fn declare() -> Vec<Self> {
            vec![Inner(IdEntity::new(1)), Inner(IdEntity::new(2))]
        }

        fn id(&self) -> Id {
            self.0.id()
        }
    }

    #[test]
    fn test_builds_once_per_registry() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert!(!registry.is_built::<Counted>());

        let before = DECLARED.load(Ordering::SeqCst);
        let first = registry.instances::<Counted>();
        let second = registry.instances::<Counted>();

        assert_eq!(DECLARED.load(Ordering::SeqCst), before + 1);
        assert!(std::ptr::eq(first, second));
        assert!(registry.is_built::<Counted>());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_separate_registries_build_separately() {
        let a = Registry::new();
        let b = Registry::new();
        let from_a = a.instances::<Inner>();
        let from_b = b.instances::<Inner>();
        assert!(!std::ptr::eq(from_a, from_b));
        assert_eq!(from_a.len(), from_b.len());
    }

    #[test]
    fn test_nested_build_does_not_deadlock() {
        let registry = Registry::new();
        let ids: Vec<i64> = registry
            .instances::<Outer>()
            .iter()
            .map(|o| o.id().get())
            .collect();
        assert_eq!(ids, vec![100, 200]);
    }

    #[test]
    fn test_debug_reports_type_count() {
        let registry = Registry::new();
        registry.instances::<Inner>();
        assert_eq!(format!("{registry:?}"), "Registry { types: 1 }");
    }
}
