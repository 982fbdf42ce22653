//! Server configuration from environment variables.

use std::env;

pub struct Config {
    /// Address to bind, e.g. `0.0.0.0:8480`.
    pub listen_addr: String,
    /// SQLite database file path.
    pub db_path: String,
    /// Exact origin allowed for CORS; unset means same-origin only.
    pub cors_origin: Option<String>,
    /// Webhook URL for notification delivery; unset disables delivery.
    pub notify_webhook_url: Option<String>,
    /// JSON file overriding the built-in accessory catalog.
    pub accessory_catalog_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            listen_addr: env::var("FQ_LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8480".to_string()),
            db_path: env::var("FQ_DB_PATH").unwrap_or_else(|_| "data/fabriq.db".to_string()),
            cors_origin: env::var("FQ_CORS_ORIGIN").ok().filter(|v| !v.is_empty()),
            notify_webhook_url: env::var("FQ_NOTIFY_WEBHOOK_URL")
                .ok()
                .filter(|v| !v.is_empty()),
            accessory_catalog_path: env::var("FQ_ACCESSORY_CATALOG")
                .ok()
                .filter(|v| !v.is_empty()),
        }
    }
}
