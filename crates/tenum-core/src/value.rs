//! # Values — Cross-Type Equality
//!
//! `Value` is the tagged union attached to value and multi-value
//! enumerations, and the query type of every reverse lookup and every
//! case-table literal. All matching in the workspace flows through
//! [`Value::same_as`].
//!
//! ## Equality Rule
//!
//! Two values are equal iff they are the same variant with equal content.
//! There is no coercion: `Int(20)`, `Float(20.0)`, `Text("20")` and
//! `Bool(true)` are pairwise unequal. Floats compare with `==` except that
//! NaN equals NaN, which keeps the relation reflexive (and `Value: Eq`).
//!
//! Rust integers of every width up to 32 bits plus `i64` convert into
//! `Int`, so `5u8` and `5i64` are the same value. `f32` and `f64` both become
//! `Float`.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::entity::{Enumeration, Id};

/// A dynamically typed value attached to an enumeration instance.
#[derive(Debug, Clone)]
pub enum Value {
    /// Absent value.
    Null,
    /// Boolean.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Single character.
    Char(char),
    /// Owned text.
    Text(String),
    /// Reference to an instance of some enumeration.
    Entity(EntityRef),
    /// Ordered nested sequence.
    List(Vec<Value>),
}

impl Value {
    /// Reference to instance `id` of enumeration `T`.
    ///
    /// Safe to call inside `T::declare()`: it does not touch the registry.
    pub fn entity<T: 'static>(id: impl Into<Id>) -> Self {
        Self::Entity(EntityRef::of::<T>(id))
    }

    /// Strict equality: same variant and equal content.
    pub fn same_as(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Self::Char(a), Self::Char(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Entity(a), Self::Entity(b)) => a == b,
            (Self::List(a), Self::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same_as(y))
            }
            _ => false,
        }
    }

    /// Name of the variant, used in log fields and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Char(_) => "char",
            Self::Text(_) => "text",
            Self::Entity(_) => "entity",
            Self::List(_) => "list",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_entity(&self) -> Option<&EntityRef> {
        match self {
            Self::Entity(e) => Some(e),
            _ => None,
        }
    }
}

/// Equality over possibly absent operands.
///
/// An absent operand behaves like [`Value::Null`]: two absent operands are
/// equal, and absent equals an explicit `Null`.
pub fn values_equal(a: Option<&Value>, b: Option<&Value>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(v), None) | (None, Some(v)) => v.is_null(),
        (Some(x), Some(y)) => x.same_as(y),
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for Value {}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Char(c) => write!(f, "{c}"),
            Self::Text(s) => f.write_str(s),
            Self::Entity(e) => write!(f, "{e}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int(n) => serializer.serialize_i64(*n),
            Self::Float(x) => serializer.serialize_f64(*x),
            Self::Char(c) => serializer.serialize_char(*c),
            Self::Text(s) => serializer.serialize_str(s),
            Self::Entity(e) => e.serialize(serializer),
            Self::List(items) => items.serialize(serializer),
        }
    }
}

// ─── Conversions ─────────────────────────────────────────────────────

macro_rules! int_conversions {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Self::Int(i64::from(n))
                }
            }
        )*
    };
}

int_conversions!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Self::Float(f64::from(x))
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<EntityRef> for Value {
    fn from(e: EntityRef) -> Self {
        Self::Entity(e)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}

// ─── Entity References ───────────────────────────────────────────────

/// Reference to one instance of an enumeration, by type identity and id.
///
/// References to different enumeration types are never equal, even when
/// their ids coincide.
#[derive(Clone, Copy)]
pub struct EntityRef {
    type_id: TypeId,
    type_name: &'static str,
    id: Id,
}

impl EntityRef {
    /// Reference to instance `id` of type `T`.
    pub fn of<T: 'static>(id: impl Into<Id>) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            id: id.into(),
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    /// Fully qualified name of the referenced type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Last path segment of [`EntityRef::type_name`].
    pub fn short_type_name(&self) -> &'static str {
        self.type_name.rsplit("::").next().unwrap_or(self.type_name)
    }

    /// Whether this reference points into enumeration `T`.
    pub fn is<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Resolve to the referenced instance, if `T` is the right type and the
    /// id is declared.
    pub fn resolve<T: Enumeration>(&self) -> Option<&'static T> {
        if self.is::<T>() {
            T::from_id(self.id)
        } else {
            None
        }
    }
}

impl PartialEq for EntityRef {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id && self.id == other.id
    }
}

impl Eq for EntityRef {}

impl Hash for EntityRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
        self.id.hash(state);
    }
}

impl fmt::Debug for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.short_type_name(), self.id)
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl Serialize for EntityRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("EntityRef", 2)?;
        state.serialize_field("type", self.short_type_name())?;
        state.serialize_field("id", &self.id)?;
        state.end()
    }
}

/// Build a `Vec<Value>` from heterogeneous expressions.
///
/// ```
/// use tenum_core::{values, Value};
///
/// let v = values!["string2", 100.00, false];
/// assert_eq!(v, vec![Value::from("string2"), Value::Float(100.0), Value::Bool(false)]);
/// ```
#[macro_export]
macro_rules! values {
    ($($value:expr),* $(,)?) => {
        ::std::vec![$($crate::Value::from($value)),*]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Left;
    struct Right;

    #[test]
    fn test_same_variant_same_content() {
        assert_eq!(Value::from("a"), Value::Text("a".into()));
        assert_eq!(Value::from(7u8), Value::Int(7));
        assert_eq!(Value::from(1.5f32), Value::Float(1.5));
        assert_eq!(Value::from('x'), Value::Char('x'));
    }

    #[test]
    fn test_no_cross_type_coercion() {
        let float = Value::from(20.0);
        assert_ne!(float, Value::from(20));
        assert_ne!(float, Value::from("20"));
        assert_ne!(float, Value::from(true));
        assert_ne!(Value::from(1), Value::from(true));
        assert_ne!(Value::from('a'), Value::from("a"));
        assert_ne!(Value::Null, Value::from(false));
    }

    #[test]
    fn test_nan_equals_itself() {
        let nan = Value::Float(f64::NAN);
        assert_eq!(nan, nan.clone());
        assert_ne!(nan, Value::Float(0.0));
    }

    #[test]
    fn test_lists_compare_elementwise() {
        let a = values![1, "x", [Value::Null].to_vec()];
        let b = values![1, "x", [Value::Null].to_vec()];
        let c = values!["x", 1, [Value::Null].to_vec()];
        assert_eq!(Value::List(a.clone()), Value::List(b));
        assert_ne!(Value::List(a), Value::List(c));
    }

    #[test]
    fn test_values_equal_absent_operands() {
        assert!(values_equal(None, None));
        assert!(values_equal(None, Some(&Value::Null)));
        assert!(values_equal(Some(&Value::Null), None));
        assert!(!values_equal(None, Some(&Value::Int(0))));
        assert!(values_equal(Some(&Value::Int(3)), Some(&Value::Int(3))));
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("s")), Value::from("s"));
    }

    #[test]
    fn test_entity_refs_are_typed() {
        assert_eq!(Value::entity::<Left>(1), Value::entity::<Left>(1));
        assert_ne!(Value::entity::<Left>(1), Value::entity::<Left>(2));
        assert_ne!(Value::entity::<Left>(1), Value::entity::<Right>(1));
        assert_ne!(Value::entity::<Left>(1), Value::from(1));
    }

    #[test]
    fn test_entity_ref_names() {
        let r = EntityRef::of::<Left>(9);
        assert_eq!(r.short_type_name(), "Left");
        assert!(r.type_name().ends_with("::Left"));
        assert!(r.is::<Left>());
        assert!(!r.is::<Right>());
        assert_eq!(format!("{r:?}"), "Left#9");
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from(100.00).to_string(), "100");
        assert_eq!(Value::from("string2").to_string(), "string2");
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::List(values![1, false]).to_string(), "[1, false]");
        assert_eq!(Value::entity::<Left>(4).to_string(), "4");
    }

    #[test]
    fn test_serialize_json() {
        let v = Value::List(values!["a", 2, 2.5, true, Value::Null, Value::entity::<Right>(3)]);
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(
            json,
            serde_json::json!(["a", 2, 2.5, true, null, {"type": "Right", "id": 3}])
        );
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::from(1).kind(), "int");
        assert_eq!(Value::from(1.0).kind(), "float");
        assert_eq!(Value::from("s").kind(), "text");
        assert_eq!(Value::Null.kind(), "null");
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from(true).as_int(), None);
        assert_eq!(Value::from(4).as_int(), Some(4));
        assert_eq!(Value::from(0.5).as_float(), Some(0.5));
        assert_eq!(Value::from("t").as_str(), Some("t"));
        assert!(Value::entity::<Left>(1).as_entity().is_some());
    }
}
