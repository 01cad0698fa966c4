//! Farming tip catalog models and the applicability vocabularies
//!
//! All vocabularies are closed enums so the scoring engine gets
//! compile-time exhaustiveness instead of string comparisons.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::LocalizedText;
use super::weather::WeatherReading;

/// Crops supported by the advisory catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Crop {
    Wheat,
    Rice,
    Cotton,
    Sugarcane,
    Maize,
    Pulses,
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Crop::Wheat => "Wheat",
            Crop::Rice => "Rice",
            Crop::Cotton => "Cotton",
            Crop::Sugarcane => "Sugarcane",
            Crop::Maize => "Maize",
            Crop::Pulses => "Pulses",
        };
        f.write_str(label)
    }
}

/// States covered by the catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum State {
    Punjab,
    Haryana,
    UttarPradesh,
    MadhyaPradesh,
    Maharashtra,
    Gujarat,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            State::Punjab => "Punjab",
            State::Haryana => "Haryana",
            State::UttarPradesh => "Uttar Pradesh",
            State::MadhyaPradesh => "Madhya Pradesh",
            State::Maharashtra => "Maharashtra",
            State::Gujarat => "Gujarat",
        };
        f.write_str(label)
    }
}

/// Soil types farmers can select during onboarding
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SoilType {
    Alluvial,
    Black,
    Red,
    Sandy,
    Clay,
    Loamy,
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SoilType::Alluvial => "Alluvial",
            SoilType::Black => "Black",
            SoilType::Red => "Red",
            SoilType::Sandy => "Sandy",
            SoilType::Clay => "Clay",
            SoilType::Loamy => "Loamy",
        };
        f.write_str(label)
    }
}

/// Indian cropping seasons
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Kharif,
    Rabi,
    Zaid,
}

impl Season {
    /// Fixed calendar-month lookup (1..=12). Kharif covers the monsoon
    /// months June through October, Rabi November through March, Zaid the
    /// dry April and May.
    pub fn from_month(month: u32) -> Season {
        match month {
            6 | 7 | 8 | 9 | 10 => Season::Kharif,
            11 | 12 | 1 | 2 | 3 => Season::Rabi,
            _ => Season::Zaid,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Season::Kharif => "Kharif",
            Season::Rabi => "Rabi",
            Season::Zaid => "Zaid",
        };
        f.write_str(label)
    }
}

/// Crop growth stages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GrowthStage {
    Sowing,
    Vegetative,
    Flowering,
    Harvesting,
}

impl fmt::Display for GrowthStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GrowthStage::Sowing => "Sowing",
            GrowthStage::Vegetative => "Vegetative",
            GrowthStage::Flowering => "Flowering",
            GrowthStage::Harvesting => "Harvesting",
        };
        f.write_str(label)
    }
}

/// Irrigation methods
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IrrigationType {
    Canal,
    Tubewell,
    Drip,
    Sprinkler,
    RainFed,
}

impl fmt::Display for IrrigationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IrrigationType::Canal => "Canal",
            IrrigationType::Tubewell => "Tubewell",
            IrrigationType::Drip => "Drip",
            IrrigationType::Sprinkler => "Sprinkler",
            IrrigationType::RainFed => "Rain-fed",
        };
        f.write_str(label)
    }
}

/// Tip priority, contributing a fixed score bonus
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TipPriority {
    High,
    Medium,
    Low,
}

/// Advisory categories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TipCategory {
    Planting,
    Irrigation,
    Pest,
    Fertilizer,
    Harvest,
}

/// Conjunctive weather bounds attached to a tip
///
/// Every bound that is present must hold against the current reading for
/// the trigger to match; there is no partial credit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WeatherTrigger {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_temp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_temp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rainfall: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rainfall: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_humidity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_humidity: Option<f64>,
}

impl WeatherTrigger {
    /// Evaluate the trigger against a reading.
    ///
    /// Returns one descriptive label per satisfied bound when ALL present
    /// bounds hold, `None` otherwise. A trigger with no bounds never
    /// matches.
    pub fn evaluate(&self, weather: &WeatherReading) -> Option<Vec<String>> {
        let mut factors = Vec::new();
        let mut matches = true;

        if let Some(min_temp) = self.min_temp {
            if weather.temperature_celsius >= min_temp {
                factors.push(format!(
                    "High Temperature ({}°C)",
                    weather.temperature_celsius
                ));
            } else {
                matches = false;
            }
        }

        if let Some(max_temp) = self.max_temp {
            if weather.temperature_celsius <= max_temp {
                factors.push(format!(
                    "Low Temperature ({}°C)",
                    weather.temperature_celsius
                ));
            } else {
                matches = false;
            }
        }

        if let Some(min_rainfall) = self.min_rainfall {
            if weather.rainfall_mm >= min_rainfall {
                factors.push(format!("Heavy Rainfall ({}mm)", weather.rainfall_mm));
            } else {
                matches = false;
            }
        }

        if let Some(max_rainfall) = self.max_rainfall {
            if weather.rainfall_mm <= max_rainfall {
                factors.push(format!("Low Rainfall ({}mm)", weather.rainfall_mm));
            } else {
                matches = false;
            }
        }

        if let Some(min_humidity) = self.min_humidity {
            if weather.humidity_percent >= min_humidity {
                factors.push(format!("High Humidity ({}%)", weather.humidity_percent));
            } else {
                matches = false;
            }
        }

        if let Some(max_humidity) = self.max_humidity {
            if weather.humidity_percent <= max_humidity {
                factors.push(format!("Low Humidity ({}%)", weather.humidity_percent));
            } else {
                matches = false;
            }
        }

        if matches && !factors.is_empty() {
            Some(factors)
        } else {
            None
        }
    }
}

/// One static entry in the farming tip catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmingTip {
    pub id: String,
    pub category: TipCategory,
    pub icon: String,
    pub title: LocalizedText,
    pub description: LocalizedText,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rationale: Option<LocalizedText>,
    pub priority: TipPriority,
    pub crops: Vec<Crop>,
    pub states: Vec<State>,
    pub soil_types: Vec<SoilType>,
    pub seasons: Vec<Season>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub growth_stages: Option<Vec<GrowthStage>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub irrigation_types: Option<Vec<IrrigationType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather_trigger: Option<WeatherTrigger>,
}

/// A farmer's onboarding profile, supplied per request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub crop: Crop,
    pub state: State,
    pub soil: SoilType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub irrigation: Option<IrrigationType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth_stage: Option<GrowthStage>,
}

/// A catalog entry paired with its score and matched-factor labels
#[derive(Debug, Clone, Serialize)]
pub struct ScoredTip {
    pub tip: FarmingTip,
    pub score: i32,
    pub matched_factors: Vec<String>,
}

/// Kinds of generated weekly tasks
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    Season,
    Weather,
    Soil,
    CropStage,
}

/// A generated weekly advisory task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyTask {
    pub id: String,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub icon: String,
    pub completed: bool,
    pub kind: TaskKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_lookup_is_total() {
        for month in 1..=12u32 {
            // must not panic, every month maps to a season
            let _ = Season::from_month(month);
        }
        assert_eq!(Season::from_month(7), Season::Kharif);
        assert_eq!(Season::from_month(10), Season::Kharif);
        assert_eq!(Season::from_month(11), Season::Rabi);
        assert_eq!(Season::from_month(1), Season::Rabi);
        assert_eq!(Season::from_month(3), Season::Rabi);
        assert_eq!(Season::from_month(4), Season::Zaid);
        assert_eq!(Season::from_month(5), Season::Zaid);
    }

    #[test]
    fn test_trigger_all_bounds_must_hold() {
        let trigger = WeatherTrigger {
            min_temp: Some(35.0),
            min_humidity: Some(70.0),
            ..Default::default()
        };
        let reading = WeatherReading {
            temperature_celsius: 36.0,
            rainfall_mm: 0.0,
            humidity_percent: 50.0,
        };
        assert_eq!(trigger.evaluate(&reading), None);

        let reading = WeatherReading {
            temperature_celsius: 36.0,
            rainfall_mm: 0.0,
            humidity_percent: 75.0,
        };
        let factors = trigger.evaluate(&reading).unwrap();
        assert_eq!(
            factors,
            vec![
                "High Temperature (36°C)".to_string(),
                "High Humidity (75%)".to_string(),
            ]
        );
    }

    #[test]
    fn test_empty_trigger_never_matches() {
        let trigger = WeatherTrigger::default();
        let reading = WeatherReading {
            temperature_celsius: 30.0,
            rainfall_mm: 10.0,
            humidity_percent: 60.0,
        };
        assert_eq!(trigger.evaluate(&reading), None);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(State::UttarPradesh.to_string(), "Uttar Pradesh");
        assert_eq!(IrrigationType::RainFed.to_string(), "Rain-fed");
        assert_eq!(Season::Kharif.to_string(), "Kharif");
    }
}
