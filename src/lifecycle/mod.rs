//! # System Lifecycle
//!
//! Starting, wiring and stopping a library.
//!
//! # Main Components
//!
//! - [`LibrarySystem`] - Context object that owns the running library actor
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Actor logs final state** - catalog size and open loans
//! 4. **Await completion** - [`LibrarySystem::shutdown`] joins the task

pub mod library_system;
pub mod tracing;

pub use self::library_system::*;
pub use self::tracing::setup_tracing;
