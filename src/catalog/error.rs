//! Error types for the catalog.

use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The book supplied is unusable as a catalog entry (e.g. it has no identifier).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A book with the same identifier is already in the catalog.
    #[error("Book with identifier {0} already exists")]
    DuplicateIdentifier(String),

    /// The book cannot be loaned because an active loan blocks it.
    #[error("Book {identifier} is already on loan (requested by {borrower})")]
    AlreadyOnLoan { identifier: String, borrower: String },
}
