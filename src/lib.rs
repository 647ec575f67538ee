pub mod api;
pub mod config;
pub mod db;
pub mod errors;
pub mod ingestion;
pub mod metrics;
pub mod models;
pub mod risk;
pub mod schema;
pub mod services;

use tokio::sync::broadcast;

use crate::config::AppConfig;
use crate::models::WebSocketEvent;

#[derive(Clone)]
pub struct AppState {
    pub db: sqlx::PgPool,
    pub config: AppConfig,
    pub ws_tx: broadcast::Sender<WebSocketEvent>,
    pub metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
}
