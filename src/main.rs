//! Media Tracker
//!
//! A local tracker for movies, books and shows, persisted to a single JSON file and served
//! to the browser from a loopback HTTP server.

mod api;
mod config;
mod errors;
mod models;
mod service;
mod store;
mod ui;

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::{Config, LogFormat};
use service::RecordService;
use store::JsonStore;
use ui::Session;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<RecordService>,
    pub session: Arc<Mutex<Session>>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    match config.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!("Starting Media Tracker");
    tracing::info!("Data path: {:?}", config.data_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Initialize the data file
    let store = JsonStore::new(config.data_path.clone());
    store.initialize().await?;
    let service = Arc::new(RecordService::new(store));

    let session = Session::open(&service).await;
    tracing::info!("Loaded {} media items", session.data().total());

    // Create application state
    let state = AppState {
        service,
        session: Arc::new(Mutex::new(session)),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Open http://{} in a browser", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // Record API
    let api_routes = Router::new()
        .route("/media", get(api::get_all_media))
        .route("/media/{category}", post(api::add_media_item))
        .route(
            "/media/{category}/{id}",
            put(api::update_media_item).delete(api::remove_media_item),
        );

    // Tracker page
    let page_routes = Router::new()
        .route("/", get(api::index))
        .route("/category/{category}", post(api::switch_category))
        .route("/items/{category}", post(api::submit_item))
        .route("/items/{category}/{id}/delete", post(api::delete_item));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(page_routes)
        .merge(health_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
