// ABOUTME: Hazard notification capability for containers.
// ABOUTME: A trait, not a base class, so kinds may opt out and callers stay generic.

use super::Container;

/// Capability to raise a hazard notification.
///
/// All baseline kinds implement this identically; it is modeled as a
/// capability so future kinds may opt out and callers can operate over "any
/// container able to notify" without knowing the concrete kind. Delivery is
/// fire-and-forget through the tracing subscriber.
pub trait HazardNotifier {
    fn notify_hazard(&self, message: &str);
}

impl HazardNotifier for Container {
    fn notify_hazard(&self, message: &str) {
        tracing::warn!(serial = %self.serial(), "hazard notification: {message}");
    }
}

/// Send the same hazard message through every notifier.
pub fn broadcast<'a>(notifiers: impl IntoIterator<Item = &'a dyn HazardNotifier>, message: &str) {
    for notifier in notifiers {
        notifier.notify_hazard(message);
    }
}
