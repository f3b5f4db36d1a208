//! Axum router construction.
//!
//! Layer order, outermost first: access log, CORS, compression, error
//! responder, deadline, panic catcher, then the route itself. Authentication and
//! validation run as extractors inside each mutating handler.

use axum::{
    middleware as axum_mw,
    routing::get,
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, compression::CompressionLayer, cors::CorsLayer};

use super::{error, handlers, middleware, state::AppState};

/// Build the application [`Router`] with all routes and middleware attached.
pub fn build(state: AppState) -> Router {
    with_layers(routes(), state)
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::welcome))
        .route("/health", get(handlers::health))
        .route(
            "/api/products",
            get(handlers::list_products).post(handlers::create_product),
        )
        // Must stay ahead of the `:id` route.
        .route("/api/products/stats", get(handlers::product_stats))
        .route(
            "/api/products/:id",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        // Applies only to the routes above; a known path with another verb is
        // an unmatched route too.
        .method_not_allowed_fallback(handlers::not_found)
        .fallback(handlers::not_found)
}

fn with_layers(routes: Router<AppState>, state: AppState) -> Router {
    routes
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(axum_mw::from_fn_with_state(state.clone(), middleware::enforce_deadline))
        .layer(axum_mw::from_fn_with_state(state.clone(), error::render_failures))
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(axum_mw::from_fn(middleware::access_log))
        .with_state(state)
}
