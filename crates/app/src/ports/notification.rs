//! Notification port — fire-and-forget messages surfaced by the host.

use std::sync::Arc;

/// Receives success notifications when the trigger fires.
///
/// Delivery is best-effort; failures are swallowed by the implementation
/// and never reach the caller.
pub trait NotificationSink: Send + Sync {
    /// Surface a success message to the user.
    fn show_success(&self, message: &str);
}

impl<T: NotificationSink> NotificationSink for Arc<T> {
    fn show_success(&self, message: &str) {
        (**self).show_success(message);
    }
}
