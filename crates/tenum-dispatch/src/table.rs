//! # Case Table
//!
//! An ordered list of (candidate, action) arms plus an optional default
//! action, evaluated against a query in one of two modes.
//!
//! ## Lifecycle
//!
//! ```text
//! CaseTable::builder() ──▶ .case / .when / .candidate / .otherwise ──▶ build()
//!                                                                       │
//!                              match_first / match_all (any number) ◀──┘
//! ```
//!
//! `build()` is the only fallible step: it rejects a second default arm.
//! A built table holds no per-dispatch state, so it can be evaluated any
//! number of times and, since every closure is `Send + Sync`, shared across
//! threads by reference.
//!
//! ## Evaluation Rules
//!
//! - Arms are evaluated in declaration order; the default arm never takes
//!   part in matching.
//! - `First`: the first matching arm runs and evaluation stops. Later
//!   candidates are never evaluated.
//! - `All`: every non-default candidate is evaluated once and every matching
//!   arm runs, in order.
//! - In both modes the default runs iff no arm matched.
//! - A deferred candidate is evaluated at most once per dispatch; nothing is
//!   cached between dispatches.
//! - The first caller error (from a predicate or an action) aborts the
//!   dispatch and is returned unchanged. Actions that already ran stay run.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tenum_core::Value;

use crate::candidate::Candidate;
use crate::error::DispatchError;

/// Boxed arm action.
pub type Action<'a, E> = Box<dyn Fn() -> Result<(), E> + Send + Sync + 'a>;

/// Which matching arms a dispatch executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Run the first matching arm only.
    #[default]
    First,
    /// Run every matching arm.
    All,
}

impl MatchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::All => "all",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchMode {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(Self::First),
            "all" => Ok(Self::All),
            other => Err(DispatchError::UnknownMode(other.to_string())),
        }
    }
}

/// What one dispatch did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// Indices of the arms whose actions ran, in execution order. Indices
    /// count non-default arms only.
    pub executed: Vec<usize>,
    /// Whether the default action ran.
    pub fell_back: bool,
}

impl Outcome {
    /// Whether at least one non-default arm matched.
    pub fn matched(&self) -> bool {
        !self.executed.is_empty()
    }

    /// Whether any action ran at all, default included.
    pub fn ran_any(&self) -> bool {
        self.matched() || self.fell_back
    }
}

struct Arm<'a, E> {
    candidate: Candidate<'a, E>,
    action: Action<'a, E>,
}

/// A built, re-evaluable case table.
pub struct CaseTable<'a, E = Infallible> {
    arms: Vec<Arm<'a, E>>,
    fallback: Option<Action<'a, E>>,
}

impl<'a, E: 'a> CaseTable<'a, E> {
    pub fn builder() -> CaseTableBuilder<'a, E> {
        CaseTableBuilder {
            arms: Vec::new(),
            fallback: None,
            entries: 0,
            duplicate_default: None,
        }
    }

    /// Number of non-default arms.
    pub fn len(&self) -> usize {
        self.arms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }

    pub fn has_default(&self) -> bool {
        self.fallback.is_some()
    }

    /// Candidates in declaration order, default excluded.
    pub fn candidates(&self) -> impl Iterator<Item = &Candidate<'a, E>> {
        self.arms.iter().map(|arm| &arm.candidate)
    }

    /// Run the first arm matching `query`, or the default.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by an evaluated predicate or an
    /// executed action, unchanged.
    pub fn match_first(&self, query: impl Into<Value>) -> Result<Outcome, E> {
        self.dispatch(&query.into(), MatchMode::First)
    }

    /// Run every arm matching `query`, or the default if none matched.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by an evaluated predicate or an
    /// executed action, unchanged.
    pub fn match_all(&self, query: impl Into<Value>) -> Result<Outcome, E> {
        self.dispatch(&query.into(), MatchMode::All)
    }

    /// Evaluate the table against `query` in `mode`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by an evaluated predicate or an
    /// executed action, unchanged.
    pub fn dispatch(&self, query: &Value, mode: MatchMode) -> Result<Outcome, E> {
        let mut outcome = Outcome::default();

        for (index, arm) in self.arms.iter().enumerate() {
            let matched = arm.candidate.matches(query)?;
            tracing::trace!(index, candidate = %arm.candidate, matched, "candidate evaluated");
            if !matched {
                continue;
            }
            (arm.action)()?;
            outcome.executed.push(index);
            if mode == MatchMode::First {
                break;
            }
        }

        if !outcome.matched() {
            if let Some(fallback) = &self.fallback {
                fallback()?;
                outcome.fell_back = true;
            }
        }

        tracing::debug!(
            %mode,
            query = %query,
            query_kind = query.kind(),
            executed = ?outcome.executed,
            fell_back = outcome.fell_back,
            "case table dispatched"
        );
        Ok(outcome)
    }
}

impl<'a> CaseTable<'a, Infallible> {
    /// [`CaseTable::match_first`] for tables whose closures cannot fail.
    pub fn run_first(&self, query: impl Into<Value>) -> Outcome {
        match self.match_first(query) {
            Ok(outcome) => outcome,
            Err(never) => match never {},
        }
    }

    /// [`CaseTable::match_all`] for tables whose closures cannot fail.
    pub fn run_all(&self, query: impl Into<Value>) -> Outcome {
        match self.match_all(query) {
            Ok(outcome) => outcome,
            Err(never) => match never {},
        }
    }
}

impl<E> fmt::Debug for CaseTable<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaseTable")
            .field(
                "candidates",
                &self.arms.iter().map(|arm| &arm.candidate).collect::<Vec<_>>(),
            )
            .field("has_default", &self.fallback.is_some())
            .finish()
    }
}

/// Collects arms for a [`CaseTable`].
pub struct CaseTableBuilder<'a, E = Infallible> {
    arms: Vec<Arm<'a, E>>,
    fallback: Option<Action<'a, E>>,
    entries: usize,
    duplicate_default: Option<usize>,
}

impl<'a, E: 'a> CaseTableBuilder<'a, E> {
    /// Append an arm with an explicit candidate and a fallible action.
    ///
    /// A [`Candidate::Default`] here sets the default action.
    pub fn arm(mut self, candidate: Candidate<'a, E>, action: Action<'a, E>) -> Self {
        let position = self.entries;
        self.entries += 1;
        if candidate.is_default() {
            if self.fallback.is_some() {
                self.duplicate_default.get_or_insert(position);
            } else {
                self.fallback = Some(action);
            }
        } else {
            self.arms.push(Arm { candidate, action });
        }
        self
    }

    /// Literal candidate with an infallible action.
    pub fn case<F>(self, literal: impl Into<Value>, action: F) -> Self
    where
        F: Fn() + Send + Sync + 'a,
    {
        self.candidate(Candidate::literal(literal), action)
    }

    /// Literal candidate with a fallible action.
    pub fn try_case<F>(self, literal: impl Into<Value>, action: F) -> Self
    where
        F: Fn() -> Result<(), E> + Send + Sync + 'a,
    {
        self.arm(Candidate::literal(literal), Box::new(action))
    }

    /// Deferred predicate with an infallible action.
    pub fn when<P, F>(self, predicate: P, action: F) -> Self
    where
        P: Fn() -> bool + Send + Sync + 'a,
        F: Fn() + Send + Sync + 'a,
    {
        self.candidate(Candidate::when(predicate), action)
    }

    /// Fallible deferred predicate with a fallible action.
    pub fn try_when<P, F>(self, predicate: P, action: F) -> Self
    where
        P: Fn() -> Result<bool, E> + Send + Sync + 'a,
        F: Fn() -> Result<(), E> + Send + Sync + 'a,
    {
        self.arm(Candidate::try_when(predicate), Box::new(action))
    }

    /// Any prebuilt candidate (e.g. from [`expr!`](crate::expr)) with an
    /// infallible action.
    pub fn candidate<F>(self, candidate: Candidate<'a, E>, action: F) -> Self
    where
        F: Fn() + Send + Sync + 'a,
    {
        self.arm(
            candidate,
            Box::new(move || {
                action();
                Ok(())
            }),
        )
    }

    /// The default action, run when no arm matches.
    pub fn otherwise<F>(self, action: F) -> Self
    where
        F: Fn() + Send + Sync + 'a,
    {
        self.candidate(Candidate::Default, action)
    }

    /// Fallible default action.
    pub fn try_otherwise<F>(self, action: F) -> Self
    where
        F: Fn() -> Result<(), E> + Send + Sync + 'a,
    {
        self.arm(Candidate::Default, Box::new(action))
    }

    /// Finish building.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::DuplicateDefault`] if more than one default
    /// arm was declared.
    pub fn build(self) -> Result<CaseTable<'a, E>, DispatchError> {
        if let Some(position) = self.duplicate_default {
            return Err(DispatchError::DuplicateDefault { position });
        }
        Ok(CaseTable {
            arms: self.arms,
            fallback: self.fallback,
        })
    }
}
