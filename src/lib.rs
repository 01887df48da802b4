#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Library Catalog
//!
//! > **An in-memory book catalog with loans, observers and pluggable notifications.**
//!
//! The crate keeps a collection of books, lets callers add, remove and search
//! them, tracks who has borrowed what, and tells registered observers whenever
//! a new book arrives.
//!
//! ## 🏗️ Design
//!
//! ### Ports, not transports
//! The catalog talks to the outside world through two traits:
//! - [`Notifier`](notification::Notifier) - sends a message to a borrower. Injected once
//!   when the manager is created.
//! - [`CatalogObserver`](observer::CatalogObserver) - hears about every added book.
//!   Observers are called in registration order; one failing observer does not stop the rest.
//!
//! ### Explicit context instead of a global
//! There is no process-wide instance. Build a [`LibraryManager`](catalog::LibraryManager)
//! directly for single-threaded use, or start a [`LibrarySystem`](lifecycle::LibrarySystem)
//! and share its [`LibraryClient`](service::LibraryClient) across tasks.
//!
//! ### Errors vs. no-ops
//! Broken invariants (empty or duplicate identifier, a book already on loan) come back as
//! [`CatalogError`](catalog::CatalogError). Looking up something that is not there
//! (removing an unknown book, returning a loan that does not exist) is a no-op reported as `None`.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! - **Key items**: [`Book`](model::Book), [`BookBuilder`](model::BookBuilder), [`Loan`](model::Loan).
//!
//! ### 2. The Core ([`catalog`])
//! - **Role**: Owns the books, the loan ledger and the observers, and enforces uniqueness.
//! - **Key items**: [`LibraryManager`](catalog::LibraryManager), [`LibraryConfig`](catalog::LibraryConfig).
//!
//! ### 3. The Ports ([`notification`], [`observer`])
//! - **Key items**: [`LogNotifier`](notification::LogNotifier), [`Patron`](observer::Patron).
//!
//! ### 4. The Service ([`service`], [`lifecycle`])
//! - **Role**: Runs the manager inside a Tokio actor so concurrent callers are serialized.
//! - **Key items**: [`LibraryActor`](service::LibraryActor), [`LibrarySystem`](lifecycle::LibrarySystem).
//!
//! ### 5. Test Doubles ([`testing`])
//! Recording and failing implementations of both ports.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test
//! ```

pub mod catalog;
pub mod lifecycle;
pub mod model;
pub mod notification;
pub mod observer;
pub mod service;
pub mod testing;
