//! # Dispatch Errors
//!
//! Only table construction and mode parsing can fail inside this crate.
//! Errors raised by caller closures during a dispatch are the caller's own
//! type `E` and pass through untouched.

use thiserror::Error;

/// Error building a case table or parsing a match mode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// A table may carry at most one default arm.
    #[error("case table declares more than one default arm (second at entry {position})")]
    DuplicateDefault {
        /// Zero-based entry position of the second default, counting every
        /// arm pushed to the builder.
        position: usize,
    },

    /// A match mode string was neither `first` nor `all`.
    #[error("unknown match mode: {0:?} (expected \"first\" or \"all\")")]
    UnknownMode(String),
}
