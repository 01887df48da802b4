//! # Library Service
//!
//! Actor front end for the catalog. The [`LibraryActor`] owns the
//! [`LibraryManager`](crate::catalog::LibraryManager) inside a single Tokio
//! task; [`LibraryClient`] handles talk to it over an mpsc channel and get
//! replies on oneshot channels.
//!
//! # Main Components
//!
//! - [`LibraryActor`] - Server half, processes requests sequentially
//! - [`LibraryClient`] - Cloneable async handle
//! - [`LibraryRequest`] - Message enum, one variant per operation
//! - [`ServiceError`] - Plumbing failures plus catalog rejections

pub mod actor;
pub mod client;
pub mod error;
pub mod message;

pub use actor::LibraryActor;
pub use client::LibraryClient;
pub use error::ServiceError;
pub use message::{LibraryRequest, Response, SearchField};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogError, LibraryConfig};
    use crate::model::Book;
    use crate::testing::RecordingNotifier;

    #[tokio::test]
    async fn test_client_reports_catalog_errors() {
        let (actor, client) = LibraryActor::new(LibraryConfig::default(), RecordingNotifier::new());
        let handle = tokio::spawn(actor.run());

        let book = Book::builder().title("1984").identifier("987654321").build();
        client.add_book(book.clone()).await.unwrap();
        let err = client.add_book(book).await.unwrap_err();
        assert_eq!(
            err,
            ServiceError::Catalog(CatalogError::DuplicateIdentifier("987654321".to_string()))
        );

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_closed_actor_is_reported() {
        let (actor, client) = LibraryActor::new(LibraryConfig::default(), RecordingNotifier::new());
        drop(actor);

        let err = client.books().await.unwrap_err();
        assert_eq!(err, ServiceError::ActorClosed);
    }
}
