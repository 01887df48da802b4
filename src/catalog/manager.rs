use crate::catalog::{CatalogError, LibraryConfig};
use crate::model::{Book, Loan};
use crate::notification::Notifier;
use crate::observer::CatalogObserver;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The catalog-and-loan manager.
///
/// Owns the book collection, the loan ledger and the observer list, and is
/// the only thing that mutates them. The [`Notifier`] is bound once in
/// [`new`](LibraryManager::new) and cannot be swapped afterwards.
///
/// # Policy
///
/// * Invariant violations (`add_book` with an empty identifier or a duplicate
///   identifier, a blocked loan) return a [`CatalogError`].
/// * Not-found conditions (`remove_book`, `loan_book`, `return_book` on an
///   unknown book or loan) are no-ops reported through `None`.
///
/// ```
/// use library_catalog::catalog::{LibraryConfig, LibraryManager};
/// use library_catalog::model::Book;
/// use library_catalog::notification::LogNotifier;
///
/// let mut library = LibraryManager::new(LibraryConfig::default(), LogNotifier);
/// let book = Book::builder().title("1984").author("George Orwell").identifier("987654321").build();
/// library.add_book(book).unwrap();
///
/// assert_eq!(library.search_by_author("Orwell").len(), 1);
/// ```
pub struct LibraryManager {
    config: LibraryConfig,
    books: Vec<Book>,
    loans: Vec<Loan>,
    observers: Vec<Arc<dyn CatalogObserver>>,
    notifier: Box<dyn Notifier>,
}

impl fmt::Debug for LibraryManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LibraryManager")
            .field("config", &self.config)
            .field("books", &self.books)
            .field("loans", &self.loans)
            .field("observers_count", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl LibraryManager {
    pub fn new(config: LibraryConfig, notifier: impl Notifier + 'static) -> Self {
        Self {
            config,
            books: Vec::new(),
            loans: Vec::new(),
            observers: Vec::new(),
            notifier: Box::new(notifier),
        }
    }

    pub fn config(&self) -> &LibraryConfig {
        &self.config
    }

    /// Adds a book and announces it to every observer.
    ///
    /// # Errors
    /// - [`CatalogError::InvalidArgument`] if the identifier is empty.
    /// - [`CatalogError::DuplicateIdentifier`] if the identifier is taken.
    pub fn add_book(&mut self, book: Book) -> Result<(), CatalogError> {
        debug!(?book, "add_book called");
        if book.identifier().is_empty() {
            warn!(title = %book.title(), "Rejected book without identifier");
            return Err(CatalogError::InvalidArgument(
                "book identifier must not be empty".to_string(),
            ));
        }
        if self.find_book(book.identifier()).is_some() {
            warn!(identifier = %book.identifier(), "Duplicate identifier");
            return Err(CatalogError::DuplicateIdentifier(
                book.identifier().to_string(),
            ));
        }

        self.books.push(book.clone());
        self.notify_observers(&book);
        info!(identifier = %book.identifier(), title = %book.title(), size = self.books.len(), "Book added");
        Ok(())
    }

    /// Removes the book with `identifier`, returning it if it was present.
    ///
    /// Active loans for the book are left in the ledger.
    pub fn remove_book(&mut self, identifier: &str) -> Option<Book> {
        let Some(index) = self.books.iter().position(|b| b.identifier() == identifier) else {
            debug!(identifier, "remove_book: no such book");
            return None;
        };
        let removed = self.books.remove(index);
        info!(identifier, size = self.books.len(), "Book removed");
        Some(removed)
    }

    /// Books whose title contains `query`.
    pub fn search_by_title(&self, query: &str) -> Vec<&Book> {
        self.books.iter().filter(|b| b.title().contains(query)).collect()
    }

    /// Books whose author contains `query`.
    pub fn search_by_author(&self, query: &str) -> Vec<&Book> {
        self.books.iter().filter(|b| b.author().contains(query)).collect()
    }

    /// Books whose identifier equals `query` exactly.
    pub fn search_by_identifier(&self, query: &str) -> Vec<&Book> {
        self.books.iter().filter(|b| b.identifier() == query).collect()
    }

    pub fn find_book(&self, identifier: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.identifier() == identifier)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Opens a loan and notifies the borrower.
    ///
    /// Returns `Ok(None)` without touching the ledger if the book is unknown.
    ///
    /// # Errors
    /// [`CatalogError::AlreadyOnLoan`] if `borrower_id` already holds the
    /// book, or, with `exclusive_loans` set, anyone does.
    pub fn loan_book(
        &mut self,
        identifier: &str,
        borrower_id: &str,
    ) -> Result<Option<Loan>, CatalogError> {
        let Some(book) = self.find_book(identifier) else {
            debug!(identifier, borrower = %borrower_id, "loan_book: no such book");
            return Ok(None);
        };
        let title = book.title().to_string();

        let held_by_borrower = self.loans.iter().any(|l| l.matches(identifier, borrower_id));
        if held_by_borrower || (self.config.exclusive_loans && self.is_on_loan(identifier)) {
            warn!(identifier, borrower = %borrower_id, "Book already on loan");
            return Err(CatalogError::AlreadyOnLoan {
                identifier: identifier.to_string(),
                borrower: borrower_id.to_string(),
            });
        }

        let loan = Loan::new(identifier, borrower_id);
        self.loans.push(loan.clone());
        self.send(borrower_id, &format!("You have requested the book {title}"));
        info!(identifier, borrower = %borrower_id, %title, "Book loaned");
        Ok(Some(loan))
    }

    /// Closes the loan of `identifier` held by `borrower_id`, if there is one.
    pub fn return_book(&mut self, identifier: &str, borrower_id: &str) -> Option<Loan> {
        let Some(index) = self
            .loans
            .iter()
            .position(|l| l.matches(identifier, borrower_id))
        else {
            debug!(identifier, borrower = %borrower_id, "return_book: no such loan");
            return None;
        };
        let loan = self.loans.remove(index);
        self.send(
            borrower_id,
            &format!("You have returned the book with identifier {identifier}. Thank you!"),
        );
        info!(identifier, borrower = %borrower_id, "Book returned");
        Some(loan)
    }

    pub fn active_loans(&self) -> &[Loan] {
        &self.loans
    }

    pub fn loans_for(&self, borrower_id: &str) -> Vec<&Loan> {
        self.loans.iter().filter(|l| l.borrower_id() == borrower_id).collect()
    }

    pub fn is_on_loan(&self, identifier: &str) -> bool {
        self.loans.iter().any(|l| l.identifier() == identifier)
    }

    /// Registers an observer. No duplicate check; order is notification order.
    pub fn add_observer(&mut self, observer: Arc<dyn CatalogObserver>) {
        self.observers.push(observer);
        debug!(observers = self.observers.len(), "Observer registered");
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn notify_observers(&self, book: &Book) {
        for (position, observer) in self.observers.iter().enumerate() {
            if let Err(e) = observer.on_book_added(book) {
                warn!(position, identifier = %book.identifier(), error = %e, "Observer failed");
            }
        }
    }

    fn send(&self, recipient_id: &str, message: &str) {
        if let Err(e) = self.notifier.notify(recipient_id, message) {
            warn!(recipient = %recipient_id, error = %e, "Notification failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{EventLog, FailingNotifier, FailingObserver, RecordingNotifier, RecordingObserver};

    fn orwell() -> Book {
        Book::builder()
            .title("1984")
            .author("George Orwell")
            .identifier("987654321")
            .build()
    }

    fn gatsby() -> Book {
        Book::builder()
            .title("The Great Gatsby")
            .author("F. Scott Fitzgerald")
            .identifier("123456789")
            .build()
    }

    fn manager() -> (LibraryManager, RecordingNotifier) {
        let notifier = RecordingNotifier::new();
        let manager = LibraryManager::new(LibraryConfig::default(), notifier.clone());
        (manager, notifier)
    }

    #[test]
    fn test_duplicate_identifier_rejected() {
        let (mut library, _) = manager();
        library.add_book(orwell()).unwrap();

        let err = library.add_book(orwell()).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateIdentifier("987654321".to_string()));
        assert_eq!(library.book_count(), 1);
    }

    #[test]
    fn test_empty_identifier_is_invalid() {
        let (mut library, _) = manager();
        let err = library.add_book(Book::builder().title("Untitled").build()).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidArgument(_)));
        assert_eq!(library.book_count(), 0);
    }

    #[test]
    fn test_whitespace_identifier_is_a_real_key() {
        let (mut library, _) = manager();
        library.add_book(Book::builder().identifier("   ").build()).unwrap();

        assert_eq!(library.search_by_identifier("   ").len(), 1);
        assert!(library.search_by_identifier("").is_empty());
    }

    #[test]
    fn test_observers_called_in_registration_order() {
        let (mut library, _) = manager();
        let log = EventLog::new();
        for name in ["A", "B", "C"] {
            library.add_observer(Arc::new(RecordingObserver::new(name, &log)));
        }

        library.add_book(orwell()).unwrap();

        assert_eq!(log.entries(), vec!["A:987654321", "B:987654321", "C:987654321"]);
    }

    #[test]
    fn test_rejected_book_does_not_reach_observers() {
        let (mut library, _) = manager();
        let log = EventLog::new();
        library.add_observer(Arc::new(RecordingObserver::new("A", &log)));

        library.add_book(orwell()).unwrap();
        let _ = library.add_book(orwell());

        assert_eq!(log.entries().len(), 1);
    }

    #[test]
    fn test_failing_observer_is_isolated() {
        let (mut library, _) = manager();
        let log = EventLog::new();
        library.add_observer(Arc::new(RecordingObserver::new("A", &log)));
        library.add_observer(Arc::new(FailingObserver::new("B", &log)));
        library.add_observer(Arc::new(RecordingObserver::new("C", &log)));

        assert!(library.add_book(orwell()).is_ok());
        assert_eq!(log.entries(), vec!["A:987654321", "B:987654321", "C:987654321"]);
    }

    #[test]
    fn test_remove_missing_book_is_noop() {
        let (mut library, _) = manager();
        library.add_book(orwell()).unwrap();

        assert!(library.remove_book("nonexistent-id").is_none());
        assert_eq!(library.books(), &[orwell()]);
    }

    #[test]
    fn test_remove_existing_book() {
        let (mut library, _) = manager();
        library.add_book(orwell()).unwrap();
        library.add_book(gatsby()).unwrap();

        assert_eq!(library.remove_book("987654321"), Some(orwell()));
        assert_eq!(library.books(), &[gatsby()]);
        // The identifier is free again.
        assert!(library.add_book(orwell()).is_ok());
    }

    #[test]
    fn test_searches() {
        let (mut library, _) = manager();
        library.add_book(orwell()).unwrap();
        library.add_book(gatsby()).unwrap();

        assert_eq!(library.search_by_title("Great"), vec![&gatsby()]);
        assert_eq!(library.search_by_author("Orwell"), vec![&orwell()]);
        assert_eq!(library.search_by_identifier("987654321"), vec![&orwell()]);
        // Identifier search is exact, not substring.
        assert!(library.search_by_identifier("98765").is_empty());
        // Empty query matches every title.
        assert_eq!(library.search_by_title("").len(), 2);

        let first: Vec<Book> = library.search_by_author("F.").into_iter().cloned().collect();
        let second: Vec<Book> = library.search_by_author("F.").into_iter().cloned().collect();
        assert_eq!(first, second);
        assert_eq!(library.book_count(), 2);
    }

    #[test]
    fn test_loan_then_return_round_trip() {
        let (mut library, notifier) = manager();
        library.add_book(orwell()).unwrap();

        let loan = library.loan_book("987654321", "user01").unwrap().unwrap();
        assert_eq!(loan.borrower_id(), "user01");
        assert!(library.is_on_loan("987654321"));
        // Loans do not remove books from the catalog.
        assert_eq!(library.search_by_identifier("987654321").len(), 1);

        let returned = library.return_book("987654321", "user01").unwrap();
        assert_eq!(returned, loan);
        assert!(library.active_loans().is_empty());
        assert_eq!(library.books(), &[orwell()]);

        let sent = notifier.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].recipient_id, "user01");
        assert_eq!(sent[0].message, "You have requested the book 1984");
        assert_eq!(
            sent[1].message,
            "You have returned the book with identifier 987654321. Thank you!"
        );
    }

    #[test]
    fn test_loan_unknown_book_is_noop() {
        let (mut library, notifier) = manager();
        assert_eq!(library.loan_book("missing", "user01"), Ok(None));
        assert!(library.active_loans().is_empty());
        assert!(notifier.sent().is_empty());
    }

    #[test]
    fn test_return_without_loan_is_noop() {
        let (mut library, notifier) = manager();
        library.add_book(orwell()).unwrap();
        library.loan_book("987654321", "user01").unwrap();

        assert!(library.return_book("987654321", "user02").is_none());
        assert_eq!(library.active_loans().len(), 1);
        assert_eq!(notifier.sent().len(), 1);
    }

    #[test]
    fn test_exclusive_loans_block_second_borrower() {
        let (mut library, _) = manager();
        library.add_book(orwell()).unwrap();
        library.loan_book("987654321", "user01").unwrap();

        let err = library.loan_book("987654321", "user02").unwrap_err();
        assert_eq!(
            err,
            CatalogError::AlreadyOnLoan {
                identifier: "987654321".to_string(),
                borrower: "user02".to_string(),
            }
        );
        assert_eq!(library.loans_for("user02").len(), 0);
    }

    #[test]
    fn test_shared_loans_allow_second_borrower_but_not_same_pair() {
        let config = LibraryConfig::default().with_exclusive_loans(false);
        let mut library = LibraryManager::new(config, RecordingNotifier::new());
        library.add_book(orwell()).unwrap();

        library.loan_book("987654321", "user01").unwrap();
        assert!(library.loan_book("987654321", "user02").unwrap().is_some());
        assert!(matches!(
            library.loan_book("987654321", "user01"),
            Err(CatalogError::AlreadyOnLoan { .. })
        ));
        assert_eq!(library.active_loans().len(), 2);
    }

    #[test]
    fn test_notification_failure_keeps_loan() {
        let mut library = LibraryManager::new(LibraryConfig::default(), FailingNotifier);
        library.add_book(orwell()).unwrap();

        assert!(library.loan_book("987654321", "user01").unwrap().is_some());
        assert!(library.is_on_loan("987654321"));
    }

    #[test]
    fn test_notification_failure_keeps_return() {
        let mut library = LibraryManager::new(LibraryConfig::default(), FailingNotifier);
        library.add_book(orwell()).unwrap();
        let loan = library.loan_book("987654321", "user01").unwrap().unwrap();

        assert_eq!(library.return_book("987654321", "user01"), Some(loan));
        assert!(library.active_loans().is_empty());
        assert!(!library.is_on_loan("987654321"));
    }
}
