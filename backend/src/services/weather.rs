//! Synthetic weather service
//!
//! Generates seasonal mock readings and a short forecast, and keeps the
//! last reading in a last-write-wins snapshot. Randomness lives here and
//! only here; the recommendation engine consumes readings as plain input.

use std::sync::Arc;

use chrono::{Datelike, Utc};
use rand::Rng;
use shared::{DailyForecast, WeatherReading};
use tokio::sync::RwLock;

/// Weather service holding the last-reading snapshot
#[derive(Clone, Default)]
pub struct WeatherService {
    last_reading: Arc<RwLock<Option<WeatherReading>>>,
}

impl WeatherService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a synthetic reading for the current month and cache it
    pub async fn current(&self) -> WeatherReading {
        let reading = synthetic_reading(Utc::now().month());
        *self.last_reading.write().await = Some(reading);
        reading
    }

    /// The most recent reading, if any was generated
    pub async fn last_reading(&self) -> Option<WeatherReading> {
        *self.last_reading.read().await
    }

    /// The reading to use for a request: the caller-provided one if present,
    /// otherwise the cached snapshot, otherwise a fresh synthetic reading
    pub async fn reading_for_request(&self, provided: Option<WeatherReading>) -> WeatherReading {
        if let Some(reading) = provided {
            return reading;
        }
        if let Some(cached) = self.last_reading().await {
            return cached;
        }
        self.current().await
    }

    /// Synthetic forecast for the next `days` days
    pub async fn forecast(&self, days: usize) -> Vec<DailyForecast> {
        let mut rng = rand::thread_rng();
        let today = Utc::now().date_naive();

        (0..days)
            .map(|i| {
                let date = today + chrono::Days::new(i as u64);
                let base = synthetic_reading(date.month());
                let variation = rng.gen_range(-3.0..3.0);

                let day_name = if i == 0 {
                    "Today".to_string()
                } else {
                    date.format("%a").to_string()
                };

                DailyForecast {
                    date,
                    day_name,
                    weather: WeatherReading {
                        temperature_celsius: round1(base.temperature_celsius + variation),
                        rainfall_mm: round1(base.rainfall_mm + rng.gen_range(0.0..5.0)),
                        humidity_percent: round1(base.humidity_percent + variation),
                    },
                }
            })
            .collect()
    }
}

/// One synthetic reading drawn from the month's seasonal ranges
fn synthetic_reading(month: u32) -> WeatherReading {
    let mut rng = rand::thread_rng();

    match month {
        // Monsoon: hot, wet, humid
        6..=10 => WeatherReading {
            temperature_celsius: rng.gen_range(32.0..38.0),
            rainfall_mm: rng.gen_range(5.0..30.0),
            humidity_percent: rng.gen_range(65.0..85.0),
        },
        // Winter: mild and dry
        11 | 12 | 1..=3 => WeatherReading {
            temperature_celsius: rng.gen_range(18.0..28.0),
            rainfall_mm: rng.gen_range(0.0..5.0),
            humidity_percent: rng.gen_range(40.0..60.0),
        },
        // Summer: warm, occasional showers
        _ => WeatherReading {
            temperature_celsius: rng.gen_range(25.0..33.0),
            rainfall_mm: rng.gen_range(0.0..10.0),
            humidity_percent: rng.gen_range(45.0..70.0),
        },
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monsoon_ranges() {
        for _ in 0..100 {
            let r = synthetic_reading(7);
            assert!((32.0..38.0).contains(&r.temperature_celsius));
            assert!((5.0..30.0).contains(&r.rainfall_mm));
            assert!((65.0..85.0).contains(&r.humidity_percent));
        }
    }

    #[test]
    fn test_winter_ranges() {
        for month in [11, 12, 1, 2, 3] {
            let r = synthetic_reading(month);
            assert!((18.0..28.0).contains(&r.temperature_celsius));
            assert!((0.0..5.0).contains(&r.rainfall_mm));
            assert!((40.0..60.0).contains(&r.humidity_percent));
        }
    }

    #[test]
    fn test_summer_ranges() {
        for month in [4, 5] {
            let r = synthetic_reading(month);
            assert!((25.0..33.0).contains(&r.temperature_celsius));
            assert!((0.0..10.0).contains(&r.rainfall_mm));
            assert!((45.0..70.0).contains(&r.humidity_percent));
        }
    }

    #[tokio::test]
    async fn test_snapshot_is_last_write_wins() {
        let service = WeatherService::new();
        assert!(service.last_reading().await.is_none());

        let first = service.current().await;
        assert_eq!(service.last_reading().await, Some(first));

        let second = service.current().await;
        assert_eq!(service.last_reading().await, Some(second));
    }

    #[tokio::test]
    async fn test_provided_reading_takes_precedence() {
        let service = WeatherService::new();
        let provided = WeatherReading {
            temperature_celsius: 36.0,
            rainfall_mm: 25.0,
            humidity_percent: 75.0,
        };
        let used = service.reading_for_request(Some(provided)).await;
        assert_eq!(used, provided);
    }

    #[tokio::test]
    async fn test_forecast_shape() {
        let service = WeatherService::new();
        let forecast = service.forecast(7).await;
        assert_eq!(forecast.len(), 7);
        assert_eq!(forecast[0].day_name, "Today");
        for day in &forecast[1..] {
            assert!(!day.day_name.is_empty());
            assert_ne!(day.day_name, "Today");
        }
    }
}
