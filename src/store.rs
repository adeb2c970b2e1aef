//! The book store: an ordered, read-only collection of books.

use crate::{errors::FormatError, format::iso_timestamp};
use std::{slice::Iter, sync::Arc};

/// Identifier of a book.
pub type BookId = i64;

/// The representation of a book.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Book {
    /// The identifier of the book. Expected, but not required, to be unique within a store.
    pub id: BookId,
    /// The title of the book.
    pub title: String,
    /// The person who authored the book.
    pub author: String,
    /// When the book was added, in milliseconds since the Unix epoch.
    pub created_at: i64,
}

impl Book {
    /// Create a book.
    #[inline]
    #[must_use]
    pub fn new(id: BookId, title: &str, author: &str, created_at: i64) -> Self {
        Self {
            id,
            title: title.to_owned(),
            author: author.to_owned(),
            created_at,
        }
    }

    /// The creation time as an ISO-8601 string. See [`iso_timestamp`].
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidDate`] if the stored timestamp is out of range.
    #[inline]
    pub fn created_at_iso(&self) -> Result<String, FormatError> {
        iso_timestamp(self.created_at)
    }
}

/// A fixed sequence of books, in insertion order.
///
/// There are no mutation operations. Clones share the same records, so a store can be handed to
/// any number of request handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookStore {
    /// The records, in insertion order.
    books: Arc<[Book]>,
}

impl BookStore {
    /// Create a store holding `books` in the given order. Duplicate ids are kept as they are.
    #[inline]
    #[must_use]
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: books.into(),
        }
    }

    /// The store the server ships with.
    #[inline]
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(vec![
            Book::new(1, "The Awakening", "Kate Chopin", 458_295_425),
            Book::new(2, "City of Glass", "Paul Auster", 458_295_345),
            Book::new(3, "Meditations", "Marcus Aurelius", 458_295_321),
            Book::new(4, "Steppenwolf", "Hermann Hesse", 458_297_425),
            Book::new(5, "Post Office", "Charles B.", 45_829_325),
            Book::new(6, "Ham on Rye", "Charles B.", 45_823_325),
            Book::new(7, "Of Human Bondage", "Somerset Maugham", 45_825_325),
            Book::new(8, "Asi Empieza lo Malo", "Javier Marías", 45_826_325),
        ])
    }

    /// All books, in insertion order.
    #[inline]
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Iterate over the books in insertion order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, Book> {
        self.books.iter()
    }

    /// The number of books.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the store holds no books at all.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl FromIterator<Book> for BookStore {
    #[inline]
    fn from_iter<I: IntoIterator<Item = Book>>(iter: I) -> Self {
        Self {
            books: iter.into_iter().collect(),
        }
    }
}

impl<'s> IntoIterator for &'s BookStore {
    type IntoIter = Iter<'s, Book>;
    type Item = &'s Book;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
