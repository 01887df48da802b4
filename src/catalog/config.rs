use serde::{Deserialize, Serialize};

/// Tunables for a library instance.
///
/// Every field has a default, so a partial document deserializes cleanly:
///
/// ```
/// use library_catalog::catalog::LibraryConfig;
///
/// let config = LibraryConfig::default().with_exclusive_loans(false);
/// assert!(!config.exclusive_loans);
/// assert_eq!(config.channel_capacity, 32);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Reject a loan while the same book is on loan to any borrower.
    pub exclusive_loans: bool,
    /// Capacity of the request channel feeding the library actor.
    pub channel_capacity: usize,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            exclusive_loans: true,
            channel_capacity: 32,
        }
    }
}

impl LibraryConfig {
    pub fn with_exclusive_loans(mut self, exclusive: bool) -> Self {
        self.exclusive_loans = exclusive;
        self
    }

    /// Sets the request channel capacity. Zero is raised to one since tokio
    /// channels need room for at least one message.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity.max(1);
        self
    }
}
