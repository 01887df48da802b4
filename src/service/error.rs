//! # Service Errors
//!
//! Failures seen by callers of the [`LibraryClient`](crate::service::LibraryClient):
//! either the actor plumbing broke or the catalog rejected the request.

use crate::catalog::CatalogError;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ServiceError {
    #[error("Library actor closed")]
    ActorClosed,
    #[error("Library actor dropped response channel")]
    ActorDropped,
    #[error("Library actor task failed: {0}")]
    TaskFailed(String),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
