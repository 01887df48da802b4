//! # Catalog
//!
//! The synchronous core of the crate: [`LibraryManager`] holds the books, the
//! loan ledger and the registered observers.
//!
//! ## Structure
//!
//! - [`manager`] - [`LibraryManager`] and its operations
//! - [`error`] - [`CatalogError`] returned by rejected operations
//! - [`config`] - [`LibraryConfig`] tunables
//!
//! The manager takes `&mut self` for every mutation and is not shared between
//! threads directly. For concurrent callers, run it behind the
//! [`LibraryActor`](crate::service::LibraryActor), which processes one request
//! at a time.

pub mod config;
pub mod error;
pub mod manager;

pub use config::*;
pub use error::*;
pub use manager::*;
