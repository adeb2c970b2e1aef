//! The root query object.
use crate::book_schema::Book;
use async_graphql::{ID, Object, Result};
use bookshelf::{GetBookRequest, IdArgument, Resolver};
use tracing::debug;

/// The root of every query.
pub(crate) struct Query {
    /// Serves the lookups.
    pub(crate) resolver: Resolver,
}

#[Object]
impl Query {
    /// Every book in the catalogue, in catalogue order.
    async fn books(&self) -> Vec<Book> {
        self.resolver.list_books().iter().map(Book::from).collect()
    }

    /// The book with the given id, or null if there is none.
    async fn book(&self, id: Option<ID>) -> Result<Option<Book>> {
        let request = GetBookRequest {
            id: id.map(|id| IdArgument::Single(id.0)),
        };
        let book = self.resolver.get_book(&request)?;
        if book.is_none() {
            debug!(?request, "no book matched");
        }

        Ok(book.map(Book::from))
    }
}
