//! Route definitions for the Farmer Advisory Platform

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Recommendation engine
        .route("/recommendations", post(handlers::get_recommendations))
        // Raw tip catalog
        .route("/tips", get(handlers::list_tips))
        // Synthetic weather
        .nest("/weather", weather_routes())
        // Crop image analysis gateway
        .nest("/analyze-crop", analysis_routes())
        // Advice session log
        .nest("/sessions", session_routes())
}

/// Weather routes
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/current", get(handlers::get_current_weather))
        .route("/forecast", get(handlers::get_weather_forecast))
}

/// Image analysis routes
fn analysis_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::analyze_crop))
        .route("/translate", post(handlers::translate_analysis))
        // Uploads are capped at 10MB
        .layer(DefaultBodyLimit::max(handlers::MAX_IMAGE_BYTES))
}

/// Advice session routes
fn session_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_sessions).post(handlers::create_session),
        )
        .route("/stats", get(handlers::get_session_stats))
        .route(
            "/:session_id",
            get(handlers::get_session).delete(handlers::delete_session),
        )
        .route("/:session_id/feedback", put(handlers::add_session_feedback))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, Response, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::config::{Config, GeminiConfig, ServerConfig};
    use crate::external::GeminiClient;
    use crate::services::{AdviceSessionStore, RecommendationService, WeatherService};

    const BOUNDARY: &str = "fap-multipart-test";

    fn test_state() -> AppState {
        let config = Config {
            environment: "test".to_string(),
            server: ServerConfig::default(),
            gemini: GeminiConfig {
                // Unreachable on purpose; these tests must fail before any call
                api_endpoint: "http://127.0.0.1:9".to_string(),
                api_key: "test-key".to_string(),
                model: "gemini-2.5-flash".to_string(),
            },
        };
        AppState {
            gemini: GeminiClient::new(
                config.gemini.api_endpoint.clone(),
                config.gemini.api_key.clone(),
                config.gemini.model.clone(),
            ),
            config: Arc::new(config),
            recommendations: RecommendationService::new(),
            weather: WeatherService::new(),
            sessions: AdviceSessionStore::new(),
        }
    }

    fn text_field(name: &str, value: &str) -> String {
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        )
    }

    fn image_field(bytes: &str) -> String {
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"leaf.jpg\"\r\nContent-Type: image/jpeg\r\n\r\n{bytes}\r\n"
        )
    }

    async fn post_multipart(fields: String) -> Response<Body> {
        let body = format!("{fields}--{BOUNDARY}--\r\n");
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();

        analysis_routes()
            .with_state(test_state())
            .oneshot(request)
            .await
            .unwrap()
    }

    async fn error_body(response: Response<Body>) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_analyze_without_image_is_rejected() {
        let response = post_multipart(text_field("language", "en")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = error_body(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["field"], "image");
        assert!(!body["error"]["message_hi"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_analyze_empty_image_is_rejected() {
        let response = post_multipart(image_field("")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = error_body(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["field"], "image");
    }

    #[tokio::test]
    async fn test_analyze_unknown_language_is_rejected() {
        let fields = format!(
            "{}{}",
            image_field("fake-image-bytes"),
            text_field("language", "fr")
        );
        let response = post_multipart(fields).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = error_body(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
