//! Error types produced by lookups and field formatting.
//!
//! A lookup that simply finds nothing is not an error; see
//! [`Resolver::get_book`](crate::resolver::Resolver::get_book).

use thiserror::Error;

/// Errors that may occur when looking up a single book.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LookupError {
    /// The supplied id has no numeric reading. Only reported under
    /// [`IdPolicy::Strict`](crate::resolver::IdPolicy::Strict).
    #[error("The id {raw:?} is not a number.")]
    MalformedId {
        /// The id as it was supplied, after coercion to text.
        raw: String,
    },
}

/// Errors that may occur when formatting a stored field for output.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormatError {
    /// The timestamp lies outside the range of representable dates.
    #[error("Invalid date: {millis} ms since the epoch is out of range.")]
    InvalidDate {
        /// The offending timestamp, in milliseconds since the Unix epoch.
        millis: i64,
    },
}
