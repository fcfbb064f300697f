use axum::{Server, http::HeaderValue, middleware::from_fn};
use employee_backend::{AppState, config::Config, init_tracing, middleware::logger::logger, routes};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

#[tokio::main]
async fn main() {
    let config = Config::from_env().expect("Failed to load configuration");
    init_tracing(&config);

    let state = Arc::new(AppState::new(config.clone()));

    // The UI layer is served from a separate origin
    let cors = if config.cors_allow_any() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let app = routes::create_router(state).layer(cors).layer(from_fn(logger));

    let addr: SocketAddr = config
        .server_address()
        .parse()
        .expect("Invalid server address");
    tracing::info!("Starting server on {}", addr);

    Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .expect("Server error");
}
