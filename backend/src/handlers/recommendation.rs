//! HTTP handlers for tip recommendations

use axum::{extract::State, Json};
use serde::Deserialize;
use shared::{validate_weather_reading, UserProfile, WeatherReading};

use crate::error::{AppError, AppResult};
use crate::services::recommendation::Recommendations;
use crate::AppState;

const DEFAULT_TIP_LIMIT: usize = 5;

/// Request body for ranked recommendations
#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub profile: UserProfile,
    /// When omitted, the last cached or a fresh synthetic reading is used
    #[serde(default)]
    pub weather: Option<WeatherReading>,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Rank tips, alerts and weekly tasks for a profile
pub async fn get_recommendations(
    State(state): State<AppState>,
    Json(input): Json<RecommendationRequest>,
) -> AppResult<Json<Recommendations>> {
    if let Some(reading) = &input.weather {
        validate_weather_reading(reading)
            .map_err(|msg| AppError::ValidationError(msg.to_string()))?;
    }

    let weather = state.weather.reading_for_request(input.weather).await;
    let limit = input.limit.unwrap_or(DEFAULT_TIP_LIMIT);

    let recommendations = state.recommendations.rank(&input.profile, &weather, limit);
    Ok(Json(recommendations))
}
