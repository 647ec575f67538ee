use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::auth::require_auth;
use super::handlers;
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    // Public routes — no authentication required
    let public = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/metrics", get(handlers::metrics::render));

    // Protected API routes — require Bearer token when API_TOKEN is set
    let protected = Router::new()
        // Users
        .route("/api/users", post(handlers::users::create))
        .route("/api/users/:id", get(handlers::users::detail))
        .route("/api/users/:id/slates", get(handlers::users::slates))
        // Pilots
        .route("/api/pilots", get(handlers::pilots::list).post(handlers::pilots::create))
        .route("/api/pilots/:id", get(handlers::pilots::detail))
        .route("/api/pilots/:id/trades", get(handlers::pilots::trades))
        .route("/api/pilots/follow", post(handlers::pilots::follow))
        // Trades
        .route("/api/trades", get(handlers::trades::list).post(handlers::trades::create))
        .route("/api/trades/:id", get(handlers::trades::detail))
        .route("/api/trades/:id/fills", get(handlers::trades::fills))
        // Slates
        .route("/api/slates", post(handlers::slates::create))
        .route(
            "/api/slates/:id",
            get(handlers::slates::detail).patch(handlers::slates::update),
        )
        // Risk
        .route("/api/risk/estimate", post(handlers::risk::estimate))
        // Broker webhook ingest
        .route("/api/ingest/executions", post(handlers::ingest::executions))
        // WebSocket
        .route("/ws", get(handlers::ws::handler))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    // CORS: the mobile client calls straight across origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    public
        .merge(protected)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
