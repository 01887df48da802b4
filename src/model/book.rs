use serde::{Deserialize, Serialize};

/// A catalog entry.
///
/// Fields are private so a `Book` cannot change after construction. Use
/// [`BookBuilder`] (or [`Book::builder`]) to create one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    title: String,
    author: String,
    identifier: String,
}

impl Book {
    /// Starts a fresh [`BookBuilder`] with every field empty.
    pub fn builder() -> BookBuilder {
        BookBuilder::new()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Unique catalog key (e.g. an ISBN).
    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

/// Fluent builder for [`Book`] values.
///
/// # Reuse
/// The builder is reusable: [`build`](BookBuilder::build) snapshots the
/// fields configured so far and leaves the builder intact, so later setter
/// calls only affect books built afterwards.
///
/// No validation happens here. Empty strings become empty fields; the
/// catalog decides what it accepts.
///
/// ```
/// use library_catalog::model::BookBuilder;
///
/// let mut builder = BookBuilder::new();
/// let gatsby = builder
///     .title("The Great Gatsby")
///     .author("F. Scott Fitzgerald")
///     .identifier("123456789")
///     .build();
/// let orwell = builder.title("1984").author("George Orwell").identifier("987654321").build();
///
/// assert_eq!(gatsby.title(), "The Great Gatsby");
/// assert_eq!(orwell.identifier(), "987654321");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BookBuilder {
    title: String,
    author: String,
    identifier: String,
}

impl BookBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self
    }

    pub fn author(&mut self, author: impl Into<String>) -> &mut Self {
        self.author = author.into();
        self
    }

    pub fn identifier(&mut self, identifier: impl Into<String>) -> &mut Self {
        self.identifier = identifier.into();
        self
    }

    /// Produces a [`Book`] from the currently configured fields.
    pub fn build(&self) -> Book {
        Book {
            title: self.title.clone(),
            author: self.author.clone(),
            identifier: self.identifier.clone(),
        }
    }
}
