//! # tenum-dispatch — Lazy Case Tables
//!
//! A value-matching dispatcher: an ordered table of (candidate, action)
//! arms, an optional default, and two execution modes.
//!
//! ## Architecture
//!
//! - **Candidate** (`candidate.rs`): literal values, deferred predicates,
//!   quoted expressions via [`expr!`], and the default marker.
//!
//! - **Table** (`table.rs`): [`CaseTableBuilder`] collects arms and
//!   validates them once; [`CaseTable`] evaluates them against a query in
//!   [`MatchMode::First`] or [`MatchMode::All`] and reports an [`Outcome`].
//!
//! - **Error** (`error.rs`): construction and parsing failures. Errors from
//!   caller closures are generic (`E`) and never wrapped.
//!
//! ## Example
//!
//! ```
//! use parking_lot::Mutex;
//! use tenum_dispatch::CaseTable;
//!
//! let hits = Mutex::new(Vec::new());
//! let table: CaseTable = CaseTable::builder()
//!     .case("x", || hits.lock().push("x"))
//!     .otherwise(|| hits.lock().push("default"))
//!     .build()
//!     .unwrap();
//!
//! assert!(table.run_first("x").matched());
//! assert!(table.run_first("y").fell_back);
//! assert_eq!(*hits.lock(), vec!["x", "default"]);
//! ```
//!
//! ## Crate Policy
//!
//! - Depends on `tenum-core` only; all comparisons use
//!   [`Value::same_as`](tenum_core::Value::same_as).
//! - Dispatch never panics and never swallows a caller error.

pub mod candidate;
pub mod error;
pub mod table;

pub use candidate::{Candidate, Predicate};
pub use error::DispatchError;
pub use table::{Action, CaseTable, CaseTableBuilder, MatchMode, Outcome};
