//! Farmer Advisory Platform - Backend Server
//!
//! A bilingual (English/Hindi) advisory service for small farmers in India:
//! localized tip recommendations, weather-triggered alerts, weekly task
//! suggestions, and AI-backed crop image analysis.

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod routes;
mod services;

pub use config::Config;

use external::GeminiClient;
use services::{AdviceSessionStore, RecommendationService, WeatherService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub gemini: GeminiClient,
    pub recommendations: RecommendationService,
    pub weather: WeatherService,
    pub sessions: AdviceSessionStore,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fap_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Farmer Advisory Platform Server");
    tracing::info!("Environment: {}", config.environment);

    let gemini = GeminiClient::new(
        config.gemini.api_endpoint.clone(),
        config.gemini.api_key.clone(),
        config.gemini.model.clone(),
    );

    // Create application state
    let state = AppState {
        config: Arc::new(config.clone()),
        gemini,
        recommendations: RecommendationService::new(),
        weather: WeatherService::new(),
        sessions: AdviceSessionStore::new(),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Farmer Advisory Platform API v1.0"
}
