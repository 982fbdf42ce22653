use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use fabriq_core::catalog::{AccessoryCatalogTrait, StaticAccessoryCatalog};
use fabriq_core::notifications::{NoopNotificationSink, NotificationSink};
use fabriq_core::orders::{OrderService, OrderServiceTrait};
use fabriq_core::pricing::PricingService;
use fabriq_core::proposals::{ProposalService, ProposalServiceTrait};
use fabriq_storage_sqlite::db::{self, write_actor};
use fabriq_storage_sqlite::orders::OrderRepository;
use fabriq_storage_sqlite::proposals::ProposalRepository;

use crate::config::Config;
use crate::notifier::WebhookNotifier;

pub struct AppState {
    pub pricing_service: Arc<PricingService>,
    pub catalog: Arc<dyn AccessoryCatalogTrait>,
    pub order_service: Arc<dyn OrderServiceTrait + Send + Sync>,
    pub proposal_service: Arc<dyn ProposalServiceTrait + Send + Sync>,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("FQ_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let catalog: Arc<dyn AccessoryCatalogTrait> = match &config.accessory_catalog_path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            tracing::info!("Accessory catalog loaded from {}", path);
            Arc::new(StaticAccessoryCatalog::from_json_str(&raw)?)
        }
        None => Arc::new(StaticAccessoryCatalog::with_defaults()),
    };
    let pricing_service = Arc::new(PricingService::new(catalog.clone()));

    let order_repo = Arc::new(OrderRepository::new(pool.clone(), writer.clone()));
    let proposal_repo = Arc::new(ProposalRepository::new(pool.clone(), writer.clone()));

    let notifier: Arc<dyn NotificationSink> = match &config.notify_webhook_url {
        Some(url) => Arc::new(WebhookNotifier::new(url)),
        None => Arc::new(NoopNotificationSink),
    };

    let order_service = Arc::new(OrderService::new(
        order_repo.clone(),
        proposal_repo.clone(),
        pricing_service.clone(),
    ));
    let proposal_service = Arc::new(ProposalService::new(proposal_repo, order_repo, notifier));

    Ok(Arc::new(AppState {
        pricing_service,
        catalog,
        order_service,
        proposal_service,
        db_path,
    }))
}
