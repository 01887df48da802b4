//! # Catalog Observers
//!
//! Parties interested in inventory changes implement [`CatalogObserver`] and
//! register with the manager. Every successful `add_book` fans the new
//! [`Book`] out to all observers in registration order.
//!
//! An observer reports failure through [`ObserverError`]. The manager logs
//! the failure and keeps notifying the remaining observers.
//!
//! A panic is a different matter: it is not caught. Inside a running
//! [`LibrarySystem`](crate::lifecycle::LibrarySystem) it unwinds the library
//! actor task, so the pending `add_book` fails with `ActorDropped`, later
//! requests fail with `ActorClosed`, and `shutdown` returns `TaskFailed`.

use crate::model::Book;
use thiserror::Error;
use tracing::info;

/// Errors an observer may return from its callback.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ObserverError {
    #[error("Observer {observer} rejected notification: {reason}")]
    Rejected { observer: String, reason: String },
}

/// Receives catalog change events.
pub trait CatalogObserver: Send + Sync {
    /// Called once for every book added to the catalog.
    fn on_book_added(&self, book: &Book) -> Result<(), ObserverError>;
}

/// A library patron subscribed to new-arrival announcements.
#[derive(Debug, Clone, PartialEq)]
pub struct Patron {
    pub id: String,
}

impl Patron {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl CatalogObserver for Patron {
    fn on_book_added(&self, book: &Book) -> Result<(), ObserverError> {
        info!(patron = %self.id, title = %book.title(), "Patron notified about new book");
        Ok(())
    }
}
