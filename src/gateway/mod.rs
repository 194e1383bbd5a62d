pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post, put},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::auth::middleware::jwt_auth_middleware;
use crate::config::AppConfig;
use crate::db::Database;
use state::AppState;

/// Start the HTTP gateway server
pub async fn run_server(config: AppConfig, port: u16, db: Arc<Database>) {
    let state = Arc::new(AppState::new(db, config.resolve_jwt_secret()));

    // Authenticated API routes
    let api_routes = Router::new()
        .route(
            "/orders",
            post(handlers::orders::create_order).get(handlers::orders::list_orders),
        )
        .route(
            "/orders/{order_id}",
            get(handlers::orders::get_order).delete(handlers::orders::delete_order),
        )
        .route(
            "/orders/{order_id}/assign",
            post(handlers::orders::assign_courier),
        )
        .route(
            "/orders/{order_id}/status",
            post(handlers::orders::update_status),
        )
        .route(
            "/orders/{order_id}/payment",
            put(handlers::orders::update_payment),
        )
        .route("/couriers", get(handlers::couriers::list_couriers))
        .route(
            "/couriers/{courier_id}/vacations",
            post(handlers::couriers::create_vacation),
        )
        .route(
            "/couriers/{courier_id}/rating",
            get(handlers::couriers::courier_rating),
        )
        .route(
            "/couriers/{courier_id}/ratings",
            post(handlers::couriers::rate_courier),
        )
        .layer(from_fn_with_state(state.clone(), jwt_auth_middleware));

    let app = Router::new()
        // Health check (public)
        .route("/api/v1/health", get(handlers::health::health_check))
        .nest("/api/v1", api_routes)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()));

    let addr = format!("{}:{}", config.server.host, port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("FATAL: Failed to bind to {}: {}", addr, e);
            eprintln!(
                "   Hint: Port {} may already be in use. Check with: lsof -i :{}",
                port, port
            );
            std::process::exit(1);
        }
    };

    tracing::info!("Gateway listening on http://{}", addr);
    tracing::info!("API Docs: http://{}/docs", addr);

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("FATAL: Server error: {}", e);
        std::process::exit(1);
    }
}
