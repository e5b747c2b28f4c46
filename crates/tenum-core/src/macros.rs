//! # Declaration Macro
//!
//! `enumeration!` turns a list of named instances into an enumeration type:
//! the newtype over the matching base struct, `declare()`, the lookup trait
//! impls, `Display`, a `From<&T> for Value` conversion, and one accessor per
//! instance returning `&'static Self`.
//!
//! ```
//! use tenum_core::{enumeration, Enumeration, MultiValueEnumeration, Value, ValueEnumeration};
//!
//! enumeration! {
//!     /// Traffic light phases.
//!     pub struct Light: ValueEntity {
//!         red = 1 => "stop",
//!         amber = 2 => "caution",
//!         green = 3 => "go",
//!     }
//! }
//!
//! enumeration! {
//!     pub struct Pair: MultiValueEntity {
//!         first = 1 => ["a", 1],
//!         second = 2 => ["b", Value::entity::<Light>(3)],
//!     }
//! }
//!
//! assert_eq!(Light::from_value("go"), Some(Light::green()));
//! assert_eq!(Pair::from_values([Value::from(Light::green()), Value::from("b")]), Some(Pair::second()));
//! assert_eq!(Light::amber().to_string(), "caution");
//! ```
//!
//! Accessors index the built slice by declaration position, so they return
//! the named instance even when ids repeat.

/// Declare an id, value, or multi-value enumeration.
///
/// The base named after the colon selects the kind: `IdEntity`
/// (`name = id`), `ValueEntity` (`name = id => value`), or
/// `MultiValueEntity` (`name = id => [v1, v2, ...]`).
#[macro_export]
macro_rules! enumeration {
    (@accessors $name:ident [$($idx:tt)*]) => {};
    (@accessors $name:ident [$($idx:tt)*] $(#[$meta:meta])* $accessor:ident $($rest:tt)*) => {
        $(#[$meta])*
        pub fn $accessor() -> &'static $name {
            &<$name as $crate::Enumeration>::all()[0 $(+ $idx)*]
        }
        $crate::enumeration!(@accessors $name [$($idx)* 1] $($rest)*);
    };

    (@common $name:ident $base:ident) => {
        impl $name {
            /// The base entity this instance wraps.
            pub fn entity(&self) -> &$crate::$base {
                &self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl<'a> ::std::convert::From<&'a $name> for $crate::Value {
            fn from(instance: &'a $name) -> Self {
                $crate::Value::Entity(<$name as $crate::Enumeration>::entity_ref(instance))
            }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : IdEntity {
            $( $(#[$item_meta:meta])* $accessor:ident = $id:expr ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis struct $name($crate::IdEntity);

        impl $crate::Enumeration for $name {
            fn declare() -> ::std::vec::Vec<Self> {
                ::std::vec![$( $name($crate::IdEntity::new($id)) ),*]
            }

            fn id(&self) -> $crate::Id {
                self.0.id()
            }
        }

        $crate::enumeration!(@common $name IdEntity);

        impl $name {
            $crate::enumeration!(@accessors $name [] $( $(#[$item_meta])* $accessor )*);
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : ValueEntity {
            $( $(#[$item_meta:meta])* $accessor:ident = $id:expr => $value:expr ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis struct $name($crate::ValueEntity);

        impl $crate::Enumeration for $name {
            fn declare() -> ::std::vec::Vec<Self> {
                ::std::vec![$( $name($crate::ValueEntity::new($id, $value)) ),*]
            }

            fn id(&self) -> $crate::Id {
                self.0.id()
            }
        }

        impl $crate::ValueEnumeration for $name {
            fn value(&self) -> &$crate::Value {
                self.0.value()
            }
        }

        $crate::enumeration!(@common $name ValueEntity);

        impl $name {
            $crate::enumeration!(@accessors $name [] $( $(#[$item_meta])* $accessor )*);
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : MultiValueEntity {
            $( $(#[$item_meta:meta])* $accessor:ident = $id:expr => [$($value:expr),* $(,)?] ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis struct $name($crate::MultiValueEntity);

        impl $crate::Enumeration for $name {
            fn declare() -> ::std::vec::Vec<Self> {
                ::std::vec![$(
                    $name($crate::MultiValueEntity::new($id, $crate::values![$($value),*]))
                ),*]
            }

            fn id(&self) -> $crate::Id {
                self.0.id()
            }
        }

        impl $crate::MultiValueEnumeration for $name {
            fn values(&self) -> &[$crate::Value] {
                self.0.values()
            }
        }

        $crate::enumeration!(@common $name MultiValueEntity);

        impl $name {
            $crate::enumeration!(@accessors $name [] $( $(#[$item_meta])* $accessor )*);
        }
    };
}
