//! # Library Messages
//!
//! Requests the [`LibraryClient`](crate::service::LibraryClient) sends to the
//! [`LibraryActor`](crate::service::LibraryActor). There is one variant per
//! catalog operation; each carries a oneshot sender for the reply.

use crate::catalog::CatalogError;
use crate::model::{Book, Loan};
use crate::observer::CatalogObserver;
use std::fmt;
use std::sync::Arc;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<T>;

/// Which field a search request matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    /// Substring match on the title.
    Title,
    /// Substring match on the author.
    Author,
    /// Exact match on the identifier.
    Identifier,
}

pub enum LibraryRequest {
    AddBook {
        book: Book,
        respond_to: Response<Result<(), CatalogError>>,
    },
    RemoveBook {
        identifier: String,
        respond_to: Response<Option<Book>>,
    },
    Search {
        field: SearchField,
        query: String,
        respond_to: Response<Vec<Book>>,
    },
    ListBooks {
        respond_to: Response<Vec<Book>>,
    },
    LoanBook {
        identifier: String,
        borrower_id: String,
        respond_to: Response<Result<Option<Loan>, CatalogError>>,
    },
    ReturnBook {
        identifier: String,
        borrower_id: String,
        respond_to: Response<Option<Loan>>,
    },
    ActiveLoans {
        respond_to: Response<Vec<Loan>>,
    },
    AddObserver {
        observer: Arc<dyn CatalogObserver>,
        respond_to: Response<()>,
    },
}

// Observers are trait objects without Debug, so only the variant name is shown.
impl fmt::Debug for LibraryRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AddBook { .. } => "AddBook",
            Self::RemoveBook { .. } => "RemoveBook",
            Self::Search { .. } => "Search",
            Self::ListBooks { .. } => "ListBooks",
            Self::LoanBook { .. } => "LoanBook",
            Self::ReturnBook { .. } => "ReturnBook",
            Self::ActiveLoans { .. } => "ActiveLoans",
            Self::AddObserver { .. } => "AddObserver",
        };
        f.write_str(name)
    }
}
