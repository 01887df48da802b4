//! # Library Actor
//!
//! The `LibraryActor` owns a [`LibraryManager`] and processes
//! [`LibraryRequest`]s one at a time. Sequential processing is what makes the
//! manager safe to reach from many tasks: no request ever observes another
//! half-applied, and no lock guards the collections.

use crate::catalog::{LibraryConfig, LibraryManager};
use crate::notification::Notifier;
use crate::service::client::LibraryClient;
use crate::service::message::{LibraryRequest, SearchField};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Server half of the library service.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `LibraryActor::new()` to get the `actor` and its `client`.
/// 2.  **Run**: Spawn `actor.run()` in a background task.
/// 3.  **Stop**: Drop every client clone; the loop ends when the channel closes.
///
/// ```rust
/// use library_catalog::catalog::LibraryConfig;
/// use library_catalog::model::Book;
/// use library_catalog::notification::LogNotifier;
/// use library_catalog::service::LibraryActor;
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = LibraryActor::new(LibraryConfig::default(), LogNotifier);
///     let handle = tokio::spawn(actor.run());
///
///     let book = Book::builder().title("1984").identifier("987654321").build();
///     client.add_book(book).await.unwrap();
///     assert_eq!(client.search_by_title("1984").await.unwrap().len(), 1);
///
///     drop(client);
///     handle.await.unwrap();
/// }
/// ```
pub struct LibraryActor {
    receiver: mpsc::Receiver<LibraryRequest>,
    manager: LibraryManager,
}

impl LibraryActor {
    /// Creates the actor and its client. The channel capacity comes from
    /// `config.channel_capacity` (at least one).
    pub fn new(config: LibraryConfig, notifier: impl Notifier + 'static) -> (Self, LibraryClient) {
        let (sender, receiver) = mpsc::channel(config.channel_capacity.max(1));
        let actor = Self {
            receiver,
            manager: LibraryManager::new(config, notifier),
        };
        (actor, LibraryClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    pub async fn run(mut self) {
        info!(size = self.manager.book_count(), "Library actor started");

        while let Some(msg) = self.receiver.recv().await {
            debug!(request = ?msg, "Handling request");
            // A dropped response receiver just means the caller stopped waiting.
            match msg {
                LibraryRequest::AddBook { book, respond_to } => {
                    let _ = respond_to.send(self.manager.add_book(book));
                }
                LibraryRequest::RemoveBook {
                    identifier,
                    respond_to,
                } => {
                    let _ = respond_to.send(self.manager.remove_book(&identifier));
                }
                LibraryRequest::Search {
                    field,
                    query,
                    respond_to,
                } => {
                    let found = match field {
                        SearchField::Title => self.manager.search_by_title(&query),
                        SearchField::Author => self.manager.search_by_author(&query),
                        SearchField::Identifier => self.manager.search_by_identifier(&query),
                    };
                    let _ = respond_to.send(found.into_iter().cloned().collect());
                }
                LibraryRequest::ListBooks { respond_to } => {
                    let _ = respond_to.send(self.manager.books().to_vec());
                }
                LibraryRequest::LoanBook {
                    identifier,
                    borrower_id,
                    respond_to,
                } => {
                    let _ = respond_to.send(self.manager.loan_book(&identifier, &borrower_id));
                }
                LibraryRequest::ReturnBook {
                    identifier,
                    borrower_id,
                    respond_to,
                } => {
                    let _ = respond_to.send(self.manager.return_book(&identifier, &borrower_id));
                }
                LibraryRequest::ActiveLoans { respond_to } => {
                    let _ = respond_to.send(self.manager.active_loans().to_vec());
                }
                LibraryRequest::AddObserver {
                    observer,
                    respond_to,
                } => {
                    self.manager.add_observer(observer);
                    let _ = respond_to.send(());
                }
            }
        }

        info!(
            size = self.manager.book_count(),
            loans = self.manager.active_loans().len(),
            "Library actor shutdown"
        );
    }
}
