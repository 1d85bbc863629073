// API module - HTTP endpoints

use axum::Router;
use tower_http::trace::TraceLayer;

pub mod health;
pub mod home;
pub mod validate;

/// Builds the application router with every route and the tracing layer
pub fn router() -> Router {
    Router::new()
        .merge(home::router())
        .merge(health::router())
        .merge(validate::router())
        .layer(TraceLayer::new_for_http())
}
