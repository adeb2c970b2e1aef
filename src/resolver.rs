//! The two lookups served over a [`BookStore`].

use crate::{
    errors::LookupError,
    parse::leading_integer,
    store::{Book, BookStore},
};
use std::borrow::Cow;

/// How to treat an id that has no numeric reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdPolicy {
    /// Such an id matches no book, and the lookup yields nothing.
    #[default]
    Lenient,
    /// The lookup fails with [`LookupError::MalformedId`].
    Strict,
}

/// An id argument as supplied by a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdArgument {
    /// A single id.
    Single(String),
    /// A list of ids. Only the leading one takes part in a lookup.
    List(Vec<String>),
}

impl IdArgument {
    /// The argument as text: a single id as is, a list joined with commas.
    #[inline]
    #[must_use]
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Single(id) => Cow::Borrowed(id),
            Self::List(ids) => Cow::Owned(ids.join(",")),
        }
    }
}

impl From<String> for IdArgument {
    #[inline]
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<&str> for IdArgument {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Single(value.to_owned())
    }
}

impl From<Vec<String>> for IdArgument {
    #[inline]
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

/// Arguments of [`Resolver::get_book`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBookRequest {
    /// The id to look for. A missing id matches no book.
    pub id: Option<IdArgument>,
}

impl GetBookRequest {
    /// A request for the book with the given id.
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<IdArgument>) -> Self {
        Self {
            id: Some(id.into()),
        }
    }
}

/// Serves lookups over a store.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    /// The books to look in.
    store: BookStore,
    /// What to do with ids that are not numbers.
    policy: IdPolicy,
}

impl Resolver {
    /// Create a resolver over `store`, with the [lenient](IdPolicy::Lenient) id policy.
    #[inline]
    #[must_use]
    pub fn new(store: BookStore) -> Self {
        Self {
            store,
            policy: IdPolicy::default(),
        }
    }

    /// Use the given id policy.
    #[inline]
    #[must_use]
    pub fn with_policy(mut self, policy: IdPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The id policy in use.
    #[inline]
    #[must_use]
    pub const fn policy(&self) -> IdPolicy {
        self.policy
    }

    /// All books, in store order.
    #[inline]
    #[must_use]
    pub fn list_books(&self) -> &[Book] {
        self.store.books()
    }

    /// The first book whose id equals the numeric reading of the requested id, as given by
    /// [`leading_integer`]. Finding no such book is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::MalformedId`] if the id is missing or has no numeric reading and
    /// the policy is [`IdPolicy::Strict`].
    #[inline]
    pub fn get_book(&self, request: &GetBookRequest) -> Result<Option<&Book>, LookupError> {
        let raw = request.id.as_ref().map(IdArgument::as_text);
        let Some(id) = raw.as_deref().and_then(leading_integer) else {
            return match self.policy {
                IdPolicy::Lenient => Ok(None),
                IdPolicy::Strict => Err(LookupError::MalformedId {
                    raw: raw.map(Cow::into_owned).unwrap_or_default(),
                }),
            };
        };

        Ok(self.store.iter().find(|book| book.id == id))
    }
}
