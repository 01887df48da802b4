//! # Notification Port
//!
//! Outbound messages to borrowers go through the [`Notifier`] trait, which is
//! injected into the [`LibraryManager`](crate::catalog::LibraryManager) when it
//! is created. The catalog never depends on a concrete transport.
//!
//! [`LogNotifier`] is the only implementation shipped here. It writes each
//! message as a structured `tracing` event and stands in for a real mail or
//! messaging gateway.

use thiserror::Error;
use tracing::info;

/// Errors a notification transport may report.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum NotificationError {
    /// The message could not be delivered to the recipient.
    #[error("Failed to notify {recipient}: {reason}")]
    Delivery { recipient: String, reason: String },
}

/// Capability to send a message to a borrower.
pub trait Notifier: Send + Sync {
    fn notify(&self, recipient_id: &str, message: &str) -> Result<(), NotificationError>;
}

/// Notifier that logs every message instead of sending it.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, recipient_id: &str, message: &str) -> Result<(), NotificationError> {
        info!(recipient = %recipient_id, body = %message, "Sending notification");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    /// Records `(name, value)` for every field of every event.
    #[derive(Clone, Default)]
    struct FieldCapture(Arc<Mutex<Vec<(String, String)>>>);

    struct FieldVisitor<'a>(&'a mut Vec<(String, String)>);

    impl Visit for FieldVisitor<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.0.push((field.name().to_string(), format!("{value:?}")));
        }
    }

    impl<S: tracing::Subscriber> Layer<S> for FieldCapture {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = self.0.lock().unwrap();
            event.record(&mut FieldVisitor(&mut fields));
        }
    }

    #[test]
    fn test_log_notifier_never_fails() {
        let notifier = LogNotifier;
        assert!(notifier.notify("user01", "hello").is_ok());
        assert!(notifier.notify("", "").is_ok());
    }

    #[test]
    fn test_log_notifier_keeps_body_apart_from_log_message() {
        let capture = FieldCapture::default();
        let subscriber = tracing_subscriber::registry().with(capture.clone());

        tracing::subscriber::with_default(subscriber, || {
            LogNotifier
                .notify("user01", "You have requested the book 1984")
                .unwrap();
        });

        let fields = capture.0.lock().unwrap().clone();
        let value_of = |name: &str| {
            fields
                .iter()
                .filter(|(n, _)| n == name)
                .map(|(_, v)| v.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(value_of("message"), vec!["Sending notification"]);
        assert_eq!(value_of("body"), vec!["You have requested the book 1984"]);
        assert_eq!(value_of("recipient"), vec!["user01"]);
    }
}
