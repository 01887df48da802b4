use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// An open borrowing record in the loan ledger.
///
/// Created by [`LibraryManager::loan_book`](crate::catalog::LibraryManager::loan_book)
/// and destroyed by the matching return. Like [`Book`](crate::model::Book),
/// a `Loan` cannot change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    identifier: String,
    borrower_id: String,
    loaned_at: SystemTime,
}

impl Loan {
    /// Creates a loan stamped with the current time.
    pub fn new(identifier: impl Into<String>, borrower_id: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            borrower_id: borrower_id.into(),
            loaned_at: SystemTime::now(),
        }
    }

    /// Identifier of the loaned book.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn borrower_id(&self) -> &str {
        &self.borrower_id
    }

    pub fn loaned_at(&self) -> SystemTime {
        self.loaned_at
    }

    /// Whether this loan is for `identifier` held by `borrower_id`.
    pub fn matches(&self, identifier: &str, borrower_id: &str) -> bool {
        self.identifier == identifier && self.borrower_id == borrower_id
    }
}
