//! HTTP handlers for the synthetic weather endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use shared::{DailyForecast, WeatherReading};

use crate::AppState;

const DEFAULT_FORECAST_DAYS: usize = 7;
const MAX_FORECAST_DAYS: usize = 14;

/// Current synthetic weather; stores the last-write-wins snapshot
pub async fn get_current_weather(State(state): State<AppState>) -> Json<WeatherReading> {
    Json(state.weather.current().await)
}

/// Query parameters for the forecast
#[derive(Debug, Deserialize)]
pub struct ForecastQuery {
    pub days: Option<usize>,
}

/// Synthetic forecast for the coming days
pub async fn get_weather_forecast(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> Json<Vec<DailyForecast>> {
    let days = query
        .days
        .unwrap_or(DEFAULT_FORECAST_DAYS)
        .clamp(1, MAX_FORECAST_DAYS);
    Json(state.weather.forecast(days).await)
}
