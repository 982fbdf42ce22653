use async_trait::async_trait;

use super::notifications_model::Notification;

/// Fire-and-forget notification delivery.
///
/// Infallible by contract: implementations log delivery failures, and a
/// failed send never rolls back the mutation that produced it.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn notify(&self, notification: Notification);
}

/// Sink that drops everything. Used in tests and as the default when no
/// delivery channel is configured.
pub struct NoopNotificationSink;

#[async_trait]
impl NotificationSink for NoopNotificationSink {
    async fn notify(&self, _notification: Notification) {}
}
