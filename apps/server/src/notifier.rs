//! Outbound webhook notifier.
//!
//! Delivers negotiation notifications to a configured HTTP endpoint.
//! Delivery is best-effort: failures are logged and never surface to the
//! mutation that triggered them.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use fabriq_core::notifications::{Notification, NotificationSink};

pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
}

impl WebhookNotifier {
    pub fn new(url: &str) -> Self {
        WebhookNotifier {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(2))
                .build()
                .unwrap_or_default(),
            url: url.to_string(),
        }
    }
}

#[async_trait]
impl NotificationSink for WebhookNotifier {
    async fn notify(&self, notification: Notification) {
        match self.client.post(&self.url).json(&notification).send().await {
            Ok(response) if response.status().is_success() => {
                debug!(recipient = %notification.recipient_id, "notification delivered");
            }
            Ok(response) => {
                warn!(
                    recipient = %notification.recipient_id,
                    status = %response.status(),
                    "notification endpoint returned an error"
                );
            }
            Err(e) => {
                warn!(
                    recipient = %notification.recipient_id,
                    error = %e,
                    "notification delivery failed"
                );
            }
        }
    }
}
