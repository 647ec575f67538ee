use tokio::sync::broadcast;

use pace::api::router::create_router;
use pace::config::AppConfig;
use pace::models::WebSocketEvent;
use pace::services::fill_feed::run_fill_feed;
use pace::{db, metrics, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let addr = format!("{}:{}", config.host, config.port);

    tracing::info!("Connecting to database...");
    let pool = db::init_pool(&config.database_url).await?;
    db::run_migrations(&pool).await?;
    tracing::info!("Database connected");

    let metrics_handle = metrics::init_metrics();

    // WebSocket broadcast channel for validated events
    let (ws_tx, _) = broadcast::channel::<WebSocketEvent>(256);

    // --- Simulated execution feed ---
    if config.fill_feed_enabled {
        let feed_pool = pool.clone();
        let feed_tx = ws_tx.clone();
        let interval_secs = config.fill_feed_interval_secs;
        tokio::spawn(async move {
            run_fill_feed(feed_pool, feed_tx, interval_secs).await;
        });
    } else {
        tracing::info!("Fill feed disabled (FILL_FEED_ENABLED=false)");
    }

    let state = AppState {
        db: pool,
        config,
        ws_tx,
        metrics_handle,
    };
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {addr}");
    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();
}
