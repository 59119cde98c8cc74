//! Desktop notification delivery.
//!
//! The engine decides *when* to notify and with what text; how the message
//! reaches the user (and whether permission exists) is the notifier's
//! concern. Delivery failures are surfaced as errors so callers can log and
//! move on.

#[cfg(test)]
use mockall::automock;
use notify_rust::Notification;

use crate::error::FocusError;

/// Delivers a titled notification to the user.
#[cfg_attr(test, automock)]
pub trait Notifier {
    /// Show a notification with the given title and body.
    ///
    /// # Errors
    ///
    /// Returns `FocusError::Notification` if the backend is unavailable or
    /// delivery fails.
    fn notify(&self, title: &str, body: &str) -> Result<(), FocusError>;
}

/// Notifier backed by the desktop notification service.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, body: &str) -> Result<(), FocusError> {
        Notification::new()
            .summary(title)
            .body(body)
            .appname("focusflow")
            .show()
            .map(|_| ())
            .map_err(|e| FocusError::Notification(format!("Failed to show notification: {e}")))
    }
}

/// Notifier that drops every message, for headless environments.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _title: &str, _body: &str) -> Result<(), FocusError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_notifier_accepts_everything() {
        let notifier = NullNotifier;
        assert!(notifier.notify("title", "body").is_ok());
        assert!(notifier.notify("", "").is_ok());
    }

    #[test]
    fn test_mock_notifier_records_call() {
        let mut mock = MockNotifier::new();
        mock.expect_notify()
            .withf(|title, body| title == "Session complete!" && body.contains("break"))
            .times(1)
            .returning(|_, _| Ok(()));

        mock.notify("Session complete!", "Take a 5 minute break.")
            .unwrap();
    }
}
