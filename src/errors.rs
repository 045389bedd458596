//! Error Types
//!
//! An empty list or a failed search is a normal outcome and is reported as
//! [`None`] by the accessors and removers, never through an error type. The
//! only fallible calls in this crate are the boundary-crossing steps of a
//! [`Cursor`](crate::Cursor).

use thiserror::Error;

/// The error type for [`Cursor`](crate::Cursor) traversal.
///
/// Both variants are recoverable: the cursor stays where it was, and callers
/// can guard against them with [`has_next`](crate::Cursor::has_next) and
/// [`has_previous`](crate::Cursor::has_previous).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorError {
    /// A forward step was requested past the last element.
    #[error("no next element")]
    NoNext,
    /// A backward step was requested before the first element.
    #[error("no previous element")]
    NoPrevious,
}
