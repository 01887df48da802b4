use crate::catalog::LibraryConfig;
use crate::notification::Notifier;
use crate::service::{LibraryActor, LibraryClient, ServiceError};
use tracing::{error, info};

/// The running library: one actor-owned catalog plus the client used to reach it.
///
/// `LibrarySystem` is the context object callers construct once at process
/// start and pass around (or clone `client` from). Each instance is fully
/// independent, so tests simply build their own.
///
/// The notifier is bound when the system starts and stays fixed for its
/// whole lifetime.
///
/// # Example
///
/// ```ignore
/// let system = LibrarySystem::start(LibraryConfig::default(), LogNotifier);
///
/// system.client.add_book(book).await?;
/// system.client.loan_book("987654321", "user01").await?;
///
/// system.shutdown().await?;
/// ```
pub struct LibrarySystem {
    /// Client for the library actor. Clone it to share with other tasks.
    pub client: LibraryClient,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl LibrarySystem {
    /// Starts the library actor on the current Tokio runtime.
    ///
    /// # Panics
    /// Panics if called outside a Tokio runtime, like `tokio::spawn`.
    pub fn start(config: LibraryConfig, notifier: impl Notifier + 'static) -> Self {
        let (actor, client) = LibraryActor::new(config, notifier);
        let handle = tokio::spawn(actor.run());
        info!("Library system started");
        Self { client, handle }
    }

    /// Gracefully shuts down the library.
    ///
    /// Drops this system's client and waits for the actor to drain. Clones of
    /// the client handed out earlier keep the actor alive, so drop them first.
    ///
    /// # Errors
    /// [`ServiceError::TaskFailed`] if the actor task panicked.
    pub async fn shutdown(self) -> Result<(), ServiceError> {
        info!("Shutting down library system...");

        // Closing the last sender ends the actor's receive loop.
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Library actor task failed: {:?}", e);
            return Err(ServiceError::TaskFailed(e.to_string()));
        }

        info!("Library system shutdown complete.");
        Ok(())
    }
}
