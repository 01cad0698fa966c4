//! Weather data models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::LocalizedText;

/// A single weather reading consumed by the recommendation engine
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeatherReading {
    pub temperature_celsius: f64,
    pub rainfall_mm: f64,
    pub humidity_percent: f64,
}

/// Kinds of weather alerts, one per fixed threshold check
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WeatherAlertKind {
    HeavyRain,
    HighTemp,
    HighHumidity,
    LowHumidity,
}

/// A static weather alert catalog entry, selected (never scored) when its
/// threshold is exceeded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherAlert {
    pub id: String,
    pub kind: WeatherAlertKind,
    pub icon: String,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub action: LocalizedText,
}

/// One day in the synthetic forecast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub day_name: String,
    pub weather: WeatherReading,
}
