//! The GraphQL representation of the catalogue's records.
use async_graphql::{ComplexObject, ID, Result, SimpleObject};
use bookshelf::{Book as StoredBook, format::iso_timestamp};
use tracing::debug;

/// The representation of a book.
#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub(crate) struct Book {
    /// The identifier of the book.
    pub(crate) id: ID,
    /// The title of the book.
    pub(crate) title: String,
    /// The person who authored the book.
    pub(crate) author: String,
    /// Milliseconds since the Unix epoch. Only ever exposed through `createdAt`.
    #[graphql(skip)]
    pub(crate) created_at_millis: i64,
}

#[ComplexObject]
impl Book {
    /// When the book was added, as an ISO-8601 timestamp in UTC.
    async fn created_at(&self) -> Result<Option<String>> {
        debug!(book = ?self, "formatting createdAt");
        Ok(Some(iso_timestamp(self.created_at_millis)?))
    }
}

impl From<&StoredBook> for Book {
    fn from(book: &StoredBook) -> Self {
        Self {
            id: ID(book.id.to_string()),
            title: book.title.clone(),
            author: book.author.clone(),
            created_at_millis: book.created_at,
        }
    }
}
