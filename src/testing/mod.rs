//! # Test Doubles
//!
//! In-memory implementations of [`Notifier`] and [`CatalogObserver`] for
//! unit and integration tests. They record what they receive so tests can
//! assert on messages and on observer call order without touching logs.
//!
//! | Double | Behavior |
//! |--------|----------|
//! | [`RecordingNotifier`] | Stores every message, always succeeds |
//! | [`FailingNotifier`] | Always returns [`NotificationError::Delivery`] |
//! | [`RecordingObserver`] | Appends `name:identifier` to a shared [`EventLog`] |
//! | [`FailingObserver`] | Appends to the log, then returns [`ObserverError::Rejected`] |
//!
//! ```
//! use library_catalog::catalog::{LibraryConfig, LibraryManager};
//! use library_catalog::model::Book;
//! use library_catalog::testing::{EventLog, RecordingNotifier, RecordingObserver};
//! use std::sync::Arc;
//!
//! let notifier = RecordingNotifier::new();
//! let log = EventLog::new();
//! let mut library = LibraryManager::new(LibraryConfig::default(), notifier.clone());
//! library.add_observer(Arc::new(RecordingObserver::new("alice", &log)));
//!
//! library.add_book(Book::builder().title("1984").identifier("42").build()).unwrap();
//! library.loan_book("42", "bob").unwrap();
//!
//! assert_eq!(log.entries(), vec!["alice:42"]);
//! assert_eq!(notifier.sent()[0].recipient_id, "bob");
//! ```

use crate::model::Book;
use crate::notification::{NotificationError, Notifier};
use crate::observer::{CatalogObserver, ObserverError};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A message captured by [`RecordingNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentNotification {
    pub recipient_id: String,
    pub message: String,
}

/// Notifier that keeps every message in memory. Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<SentNotification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages sent so far, oldest first.
    pub fn sent(&self) -> Vec<SentNotification> {
        lock(&self.sent).clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, recipient_id: &str, message: &str) -> Result<(), NotificationError> {
        lock(&self.sent).push(SentNotification {
            recipient_id: recipient_id.to_string(),
            message: message.to_string(),
        });
        Ok(())
    }
}

/// Notifier whose transport is always down.
#[derive(Debug, Clone, Default)]
pub struct FailingNotifier;

impl Notifier for FailingNotifier {
    fn notify(&self, recipient_id: &str, _message: &str) -> Result<(), NotificationError> {
        Err(NotificationError::Delivery {
            recipient: recipient_id.to_string(),
            reason: "transport unavailable".to_string(),
        })
    }
}

/// Ordered log shared between observers.
#[derive(Debug, Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<String>>>);

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<String> {
        lock(&self.0).clone()
    }

    fn record(&self, observer: &str, book: &Book) {
        lock(&self.0).push(format!("{observer}:{}", book.identifier()));
    }
}

#[derive(Debug, Clone)]
pub struct RecordingObserver {
    name: String,
    log: EventLog,
}

impl RecordingObserver {
    pub fn new(name: impl Into<String>, log: &EventLog) -> Self {
        Self {
            name: name.into(),
            log: log.clone(),
        }
    }
}

impl CatalogObserver for RecordingObserver {
    fn on_book_added(&self, book: &Book) -> Result<(), ObserverError> {
        self.log.record(&self.name, book);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct FailingObserver {
    name: String,
    log: EventLog,
}

impl FailingObserver {
    pub fn new(name: impl Into<String>, log: &EventLog) -> Self {
        Self {
            name: name.into(),
            log: log.clone(),
        }
    }
}

impl CatalogObserver for FailingObserver {
    fn on_book_added(&self, book: &Book) -> Result<(), ObserverError> {
        self.log.record(&self.name, book);
        Err(ObserverError::Rejected {
            observer: self.name.clone(),
            reason: "simulated failure".to_string(),
        })
    }
}

// Poisoned records stay readable.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
