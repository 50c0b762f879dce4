//! Router de la aplicación

pub mod api_routes;
pub mod page_routes;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::middleware::cors_middleware;
use crate::state::AppState;

/// Crear el router completo con sus capas
pub fn create_router(state: AppState) -> Router {
    let cors = cors_middleware(&state.config.cors_origins, state.config.is_development());

    Router::new()
        .route("/health", get(api_routes::health))
        .nest("/api", api_routes::create_api_router())
        .merge(page_routes::create_page_router())
        .fallback(page_routes::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors),
        )
        .with_state(state)
}
