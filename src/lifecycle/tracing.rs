//! # Observability & Tracing
//!
//! Structured logging for the whole crate goes through the `tracing` crate.
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter whose
//! verbosity is controlled by `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Catalog mutations**: books added or removed, loans opened and closed (`info`)
//! - **Rejections**: duplicate or empty identifiers, blocked loans (`warn`)
//! - **Port failures**: observers or notifiers that returned an error (`warn`)
//! - **Payloads and no-ops**: full books at entry, not-found lookups (`debug`)
//! - **Actor lifecycle**: startup, shutdown and final catalog size (`info`)
//!
//! ## Usage Examples
//!
//! ```bash
//! # Mutations, rejections and notifications
//! RUST_LOG=info cargo run
//!
//! # Also payloads and silent no-ops
//! RUST_LOG=debug cargo run
//!
//! # Only the catalog core
//! RUST_LOG=library_catalog::catalog=debug cargo run
//! ```
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Library actor started size=0
//! INFO Patron notified about new book patron="user01" title="1984"
//! INFO Book added identifier=987654321 title=1984 size=1
//! INFO loan_book: Sending notification recipient=user01 body=You have requested the book 1984
//! INFO loan_book: Book loaned identifier="987654321" borrower=user01 title=1984
//! ```

/// Initializes the global tracing subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
