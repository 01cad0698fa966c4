//! Catalog and weather-trigger tests
//!
//! Property-based and unit tests for:
//! - Weather-trigger conjunction (all bounds must hold, no partial credit)
//! - Month-to-season lookup totality
//! - Static catalog integrity

use proptest::prelude::*;
use shared::{farming_tips, Season, WeatherReading, WeatherTrigger};

// ============================================================================
// Property Test Strategies
// ============================================================================

fn weather_strategy() -> impl Strategy<Value = WeatherReading> {
    (0.0..50.0f64, 0.0..60.0f64, 0.0..100.0f64).prop_map(
        |(temperature_celsius, rainfall_mm, humidity_percent)| WeatherReading {
            temperature_celsius,
            rainfall_mm,
            humidity_percent,
        },
    )
}

fn bound_strategy() -> impl Strategy<Value = Option<f64>> {
    proptest::option::of(0.0..60.0f64)
}

fn trigger_strategy() -> impl Strategy<Value = WeatherTrigger> {
    (
        bound_strategy(),
        bound_strategy(),
        bound_strategy(),
        bound_strategy(),
        bound_strategy(),
        bound_strategy(),
    )
        .prop_map(
            |(min_temp, max_temp, min_rainfall, max_rainfall, min_humidity, max_humidity)| {
                WeatherTrigger {
                    min_temp,
                    max_temp,
                    min_rainfall,
                    max_rainfall,
                    min_humidity,
                    max_humidity,
                }
            },
        )
}

/// Whether every present bound holds against a reading
fn all_bounds_hold(trigger: &WeatherTrigger, weather: &WeatherReading) -> bool {
    trigger
        .min_temp
        .map_or(true, |b| weather.temperature_celsius >= b)
        && trigger
            .max_temp
            .map_or(true, |b| weather.temperature_celsius <= b)
        && trigger.min_rainfall.map_or(true, |b| weather.rainfall_mm >= b)
        && trigger.max_rainfall.map_or(true, |b| weather.rainfall_mm <= b)
        && trigger
            .min_humidity
            .map_or(true, |b| weather.humidity_percent >= b)
        && trigger
            .max_humidity
            .map_or(true, |b| weather.humidity_percent <= b)
}

fn bound_count(trigger: &WeatherTrigger) -> usize {
    [
        trigger.min_temp,
        trigger.max_temp,
        trigger.min_rainfall,
        trigger.max_rainfall,
        trigger.min_humidity,
        trigger.max_humidity,
    ]
    .iter()
    .filter(|b| b.is_some())
    .count()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// A trigger matches exactly when every present bound holds and at
    /// least one bound is present
    #[test]
    fn prop_trigger_is_conjunctive(
        trigger in trigger_strategy(),
        weather in weather_strategy(),
    ) {
        let expected = all_bounds_hold(&trigger, &weather) && bound_count(&trigger) > 0;
        prop_assert_eq!(trigger.evaluate(&weather).is_some(), expected);
    }

    /// A matching trigger reports one label per satisfied bound
    #[test]
    fn prop_trigger_labels_count_bounds(
        trigger in trigger_strategy(),
        weather in weather_strategy(),
    ) {
        if let Some(factors) = trigger.evaluate(&weather) {
            prop_assert_eq!(factors.len(), bound_count(&trigger));
        }
    }

    /// Every month maps to a season
    #[test]
    fn prop_season_lookup_total(month in 1u32..=12) {
        let season = Season::from_month(month);
        prop_assert!(matches!(
            season,
            Season::Kharif | Season::Rabi | Season::Zaid
        ));
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[test]
fn test_catalog_entries_pass_both_vocabularies() {
    for tip in farming_tips() {
        assert!(!tip.crops.is_empty(), "{} has no crops", tip.id);
        assert!(!tip.states.is_empty(), "{} has no states", tip.id);
        assert!(!tip.title.en.is_empty());
        assert!(!tip.title.hi.is_empty());
        assert!(!tip.description.en.is_empty());
        assert!(!tip.description.hi.is_empty());
    }
}

#[test]
fn test_catalog_triggers_have_at_least_one_bound() {
    for tip in farming_tips() {
        if let Some(trigger) = &tip.weather_trigger {
            assert!(
                bound_count(trigger) > 0,
                "{} declares an empty weather trigger",
                tip.id
            );
        }
    }
}

#[test]
fn test_partial_trigger_match_earns_nothing() {
    let trigger = WeatherTrigger {
        min_temp: Some(35.0),
        min_humidity: Some(70.0),
        ..Default::default()
    };
    let weather = WeatherReading {
        temperature_celsius: 36.0,
        rainfall_mm: 0.0,
        humidity_percent: 50.0,
    };
    assert!(trigger.evaluate(&weather).is_none());
}
