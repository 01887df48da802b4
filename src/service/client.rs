//! # Library Client
//!
//! Async handle for the [`LibraryActor`](crate::service::LibraryActor).

use crate::model::{Book, Loan};
use crate::observer::CatalogObserver;
use crate::service::error::ServiceError;
use crate::service::message::{LibraryRequest, SearchField};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Type-safe client for the library actor.
///
/// Holds only a sender, so cloning is cheap and clones can be shared across
/// tasks. Every method mirrors a [`LibraryManager`](crate::catalog::LibraryManager)
/// operation and resolves once the actor has applied it.
#[derive(Clone)]
pub struct LibraryClient {
    sender: mpsc::Sender<LibraryRequest>,
}

impl LibraryClient {
    pub fn new(sender: mpsc::Sender<LibraryRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self, book), fields(identifier = %book.identifier()))]
    pub async fn add_book(&self, book: Book) -> Result<(), ServiceError> {
        debug!(?book, "add_book called");
        let result = self
            .request(|respond_to| LibraryRequest::AddBook { book, respond_to })
            .await?;
        Ok(result?)
    }

    #[instrument(skip(self))]
    pub async fn remove_book(&self, identifier: &str) -> Result<Option<Book>, ServiceError> {
        let identifier = identifier.to_string();
        self.request(|respond_to| LibraryRequest::RemoveBook {
            identifier,
            respond_to,
        })
        .await
    }

    pub async fn search_by_title(&self, query: &str) -> Result<Vec<Book>, ServiceError> {
        self.search(SearchField::Title, query).await
    }

    pub async fn search_by_author(&self, query: &str) -> Result<Vec<Book>, ServiceError> {
        self.search(SearchField::Author, query).await
    }

    pub async fn search_by_identifier(&self, query: &str) -> Result<Vec<Book>, ServiceError> {
        self.search(SearchField::Identifier, query).await
    }

    #[instrument(skip(self))]
    pub async fn search(&self, field: SearchField, query: &str) -> Result<Vec<Book>, ServiceError> {
        let query = query.to_string();
        self.request(|respond_to| LibraryRequest::Search {
            field,
            query,
            respond_to,
        })
        .await
    }

    pub async fn books(&self) -> Result<Vec<Book>, ServiceError> {
        self.request(|respond_to| LibraryRequest::ListBooks { respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn loan_book(
        &self,
        identifier: &str,
        borrower_id: &str,
    ) -> Result<Option<Loan>, ServiceError> {
        let (identifier, borrower_id) = (identifier.to_string(), borrower_id.to_string());
        let result = self
            .request(|respond_to| LibraryRequest::LoanBook {
                identifier,
                borrower_id,
                respond_to,
            })
            .await?;
        Ok(result?)
    }

    #[instrument(skip(self))]
    pub async fn return_book(
        &self,
        identifier: &str,
        borrower_id: &str,
    ) -> Result<Option<Loan>, ServiceError> {
        let (identifier, borrower_id) = (identifier.to_string(), borrower_id.to_string());
        self.request(|respond_to| LibraryRequest::ReturnBook {
            identifier,
            borrower_id,
            respond_to,
        })
        .await
    }

    pub async fn active_loans(&self) -> Result<Vec<Loan>, ServiceError> {
        self.request(|respond_to| LibraryRequest::ActiveLoans { respond_to })
            .await
    }

    #[instrument(skip_all)]
    pub async fn add_observer(&self, observer: Arc<dyn CatalogObserver>) -> Result<(), ServiceError> {
        self.request(|respond_to| LibraryRequest::AddObserver {
            observer,
            respond_to,
        })
        .await
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<T>) -> LibraryRequest,
    ) -> Result<T, ServiceError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| ServiceError::ActorClosed)?;
        response.await.map_err(|_| ServiceError::ActorDropped)
    }
}
