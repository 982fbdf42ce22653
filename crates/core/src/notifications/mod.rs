//! Notification sink - best-effort delivery of negotiation events.

mod notifications_model;
mod notifications_traits;

pub use notifications_model::Notification;
pub use notifications_traits::{NoopNotificationSink, NotificationSink};
