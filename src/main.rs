//! # Library Catalog Demo
//!
//! Starts a [`LibrarySystem`], registers a patron, adds two books built with
//! the same builder, then loans and returns one of them.

use library_catalog::catalog::LibraryConfig;
use library_catalog::lifecycle::{setup_tracing, LibrarySystem};
use library_catalog::model::BookBuilder;
use library_catalog::notification::LogNotifier;
use library_catalog::observer::Patron;
use library_catalog::service::ServiceError;
use std::sync::Arc;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), ServiceError> {
    setup_tracing();

    info!("Starting library demo");
    let system = LibrarySystem::start(LibraryConfig::default(), LogNotifier);
    let library = &system.client;

    library.add_observer(Arc::new(Patron::new("user01"))).await?;

    let mut builder = BookBuilder::new();
    let gatsby = builder
        .title("The Great Gatsby")
        .author("F. Scott Fitzgerald")
        .identifier("123456789")
        .build();
    let orwell = builder
        .title("1984")
        .author("George Orwell")
        .identifier("987654321")
        .build();

    let span = tracing::info_span!("cataloging");
    async {
        library.add_book(gatsby).await?;
        library.add_book(orwell.clone()).await?;
        // Same identifier a second time is rejected.
        if let Err(e) = library.add_book(orwell).await {
            error!(error = %e, "Add rejected");
        }
        Ok::<_, ServiceError>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("lending");
    async {
        library.loan_book("987654321", "user01").await?;
        let still_listed = library.search_by_identifier("987654321").await?;
        info!(found = still_listed.len(), "Loaned book still in catalog");
        library.return_book("987654321", "user01").await?;
        Ok::<_, ServiceError>(())
    }
    .instrument(span)
    .await?;

    let by_author = library.search_by_author("Orwell").await?;
    info!(matches = by_author.len(), "Search by author");

    system.shutdown().await?;
    info!("Demo completed successfully");
    Ok(())
}
