//! The core of the bookshelf: a fixed, in-memory catalogue of books, the two lookups served over
//! it, and the formatting of derived fields.
//!
//! Nothing in here knows about GraphQL or HTTP. The hosting process wires a [`Resolver`] into its
//! execution engine of choice and calls [`format::iso_timestamp`] when a book is serialized.

pub mod errors;
pub mod format;
pub mod parse;
pub mod resolver;
pub mod store;

pub use errors::{FormatError, LookupError};
pub use resolver::{GetBookRequest, IdArgument, IdPolicy, Resolver};
pub use store::{Book, BookId, BookStore};
