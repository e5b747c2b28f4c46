//! # Candidates
//!
//! The key side of one case-table arm.
//!
//! | Kind | Built with | Evaluated as |
//! |------|-----------|--------------|
//! | literal | [`Candidate::literal`] | the value itself |
//! | deferred predicate | [`Candidate::when`], [`Candidate::try_when`] | `Value::Bool(predicate())` |
//! | quoted expression | [`expr!`](crate::expr), [`Candidate::labeled`] | same as a predicate; keeps its source text |
//! | default | [`Candidate::Default`] | never matches; runs only as the fallback |
//!
//! Whatever the kind, the evaluated value is compared to the query with
//! [`Value::same_as`]. A deferred candidate therefore only ever matches a
//! boolean query; against any other query it simply does not match.

use std::convert::Infallible;
use std::fmt;

use tenum_core::Value;

/// Boxed deferred predicate.
pub type Predicate<'a, E> = Box<dyn Fn() -> Result<bool, E> + Send + Sync + 'a>;

/// One case-table key.
pub enum Candidate<'a, E = Infallible> {
    /// Compared directly against the query.
    Literal(Value),
    /// Evaluated at dispatch time, then compared as `Value::Bool`.
    Deferred {
        /// Source text of a quoted expression, if any.
        label: Option<&'static str>,
        predicate: Predicate<'a, E>,
    },
    /// The fallback marker. Excluded from matching.
    Default,
}

impl<'a, E: 'a> Candidate<'a, E> {
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(value.into())
    }

    /// Deferred infallible predicate.
    pub fn when<F>(predicate: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'a,
    {
        Self::Deferred {
            label: None,
            predicate: Box::new(move || Ok(predicate())),
        }
    }

    /// Deferred predicate that may fail with the caller's error type.
    pub fn try_when<F>(predicate: F) -> Self
    where
        F: Fn() -> Result<bool, E> + Send + Sync + 'a,
    {
        Self::Deferred {
            label: None,
            predicate: Box::new(predicate),
        }
    }

    /// Deferred predicate carrying its source text. Prefer [`expr!`](crate::expr).
    pub fn labeled<F>(label: &'static str, predicate: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'a,
    {
        Self::Deferred {
            label: Some(label),
            predicate: Box::new(move || Ok(predicate())),
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred { .. })
    }

    pub fn label(&self) -> Option<&'static str> {
        match self {
            Self::Deferred { label, .. } => *label,
            _ => None,
        }
    }

    /// Evaluate the candidate (running a deferred predicate once) and compare
    /// it with `query`.
    ///
    /// # Errors
    ///
    /// Returns the predicate's own error unchanged.
    pub fn matches(&self, query: &Value) -> Result<bool, E> {
        match self {
            Self::Literal(value) => Ok(value.same_as(query)),
            Self::Deferred { predicate, .. } => {
                let evaluated = predicate()?;
                Ok(Value::Bool(evaluated).same_as(query))
            }
            Self::Default => Ok(false),
        }
    }
}

impl<E> fmt::Debug for Candidate<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::Deferred { label, .. } => f
                .debug_struct("Deferred")
                .field("label", label)
                .finish_non_exhaustive(),
            Self::Default => f.write_str("Default"),
        }
    }
}

impl<E> fmt::Display for Candidate<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => write!(f, "{value}"),
            Self::Deferred { label: Some(label), .. } => write!(f, "{{{label}}}"),
            Self::Deferred { label: None, .. } => f.write_str("{deferred}"),
            Self::Default => f.write_str("default"),
        }
    }
}

/// Quoted boolean expression as a deferred [`Candidate`].
///
/// The expression is re-evaluated on every dispatch and keeps its source
/// text for logging.
///
/// ```
/// use tenum_dispatch::{expr, Candidate};
/// use tenum_core::Value;
///
/// let limit = 3;
/// let candidate: Candidate = expr!(limit > 2);
/// assert_eq!(candidate.label(), Some("limit > 2"));
/// assert!(candidate.matches(&Value::Bool(true)).unwrap());
/// ```
#[macro_export]
macro_rules! expr {
    ($($expr:tt)+) => {
        $crate::Candidate::labeled(::std::stringify!($($expr)+), || -> bool { $($expr)+ })
    };
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn unwrap_infallible(r: Result<bool, Infallible>) -> bool {
        match r {
            Ok(b) => b,
            Err(never) => match never {},
        }
    }

    #[test]
    fn test_literal_matches_equal_value() {
        let c: Candidate = Candidate::literal("x");
        assert!(unwrap_infallible(c.matches(&Value::from("x"))));
        assert!(!unwrap_infallible(c.matches(&Value::from("y"))));
    }

    #[test]
    fn test_deferred_compares_as_bool() {
        let yes: Candidate = Candidate::when(|| true);
        let no: Candidate = Candidate::when(|| false);
        assert!(unwrap_infallible(yes.matches(&Value::Bool(true))));
        assert!(!unwrap_infallible(yes.matches(&Value::Bool(false))));
        assert!(unwrap_infallible(no.matches(&Value::Bool(false))));
    }

    #[test]
    fn test_deferred_against_non_bool_query() {
        let c: Candidate = Candidate::when(|| true);
        assert!(!unwrap_infallible(c.matches(&Value::from(20.0))));
        assert!(!unwrap_infallible(c.matches(&Value::from(1))));
        assert!(!unwrap_infallible(c.matches(&Value::from("true"))));
    }

    #[test]
    fn test_default_never_matches() {
        let c: Candidate = Candidate::Default;
        assert!(c.is_default());
        assert!(!unwrap_infallible(c.matches(&Value::Null)));
    }

    #[test]
    fn test_predicate_runs_on_each_evaluation() {
        let calls = AtomicUsize::new(0);
        let c: Candidate = Candidate::when(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            true
        });
        unwrap_infallible(c.matches(&Value::Bool(true)));
        unwrap_infallible(c.matches(&Value::Bool(true)));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_try_when_propagates_error() {
        let c: Candidate<'_, String> = Candidate::try_when(|| Err("boom".to_string()));
        assert_eq!(c.matches(&Value::Bool(true)), Err("boom".to_string()));
    }

    #[test]
    fn test_expr_macro_keeps_source() {
        let n = 7;
        let c: Candidate = expr!(n % 2 == 1);
        assert_eq!(c.label(), Some("n % 2 == 1"));
        assert!(c.is_deferred());
        assert!(unwrap_infallible(c.matches(&Value::Bool(true))));
        assert_eq!(c.to_string(), "{n % 2 == 1}");
    }

    #[test]
    fn test_display_and_debug() {
        let lit: Candidate = Candidate::literal(5);
        assert_eq!(lit.to_string(), "5");
        assert_eq!(format!("{lit:?}"), "Literal(Int(5))");
        let anon: Candidate = Candidate::when(|| true);
        assert_eq!(anon.to_string(), "{deferred}");
        assert_eq!(Candidate::<Infallible>::Default.to_string(), "default");
    }
}
