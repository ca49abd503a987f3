pub mod assets;
pub mod config;
pub mod gateway;
pub mod landing;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod template;

pub use config::Config;
pub use gateway::build_gateway;
pub use routes::{AppState, router};

/// Router with the full middleware stack, as served by `fox2it serve`
pub fn create_app(state: AppState) -> axum::Router {
    use tower_http::{compression::CompressionLayer, trace::TraceLayer};

    routes::router(state)
        // no-cache for HTML, long cache for static files
        .layer(axum::middleware::from_fn(
            middleware::cache_control_middleware,
        ))
        // Minify HTML responses before compression
        .layer(axum::middleware::map_response(
            middleware::minify_html_middleware,
        ))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http())
}
