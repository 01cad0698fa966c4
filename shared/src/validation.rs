//! Validation utilities for the Farmer Advisory Platform

use crate::models::{FarmerFeedback, WeatherReading};

/// Maximum number of weekly tasks returned by the recommendation engine
pub const MAX_WEEKLY_TASKS: usize = 6;

/// Validate a farmer feedback rating is in the 1-5 range
pub fn validate_feedback(feedback: &FarmerFeedback) -> Result<(), &'static str> {
    if !(1..=5).contains(&feedback.rating) {
        return Err("Feedback rating must be between 1 and 5");
    }
    if let Some(saved) = feedback.crop_saved_percentage {
        if !(0.0..=100.0).contains(&saved) {
            return Err("Crop saved percentage must be between 0 and 100");
        }
    }
    Ok(())
}

/// Validate a weather reading holds physically plausible values
pub fn validate_weather_reading(reading: &WeatherReading) -> Result<(), &'static str> {
    if !(0.0..=100.0).contains(&reading.humidity_percent) {
        return Err("Humidity must be between 0 and 100 percent");
    }
    if reading.rainfall_mm < 0.0 {
        return Err("Rainfall cannot be negative");
    }
    if !(-20.0..=60.0).contains(&reading.temperature_celsius) {
        return Err("Temperature out of plausible range");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OutcomeStatus;
    use chrono::Utc;

    fn feedback(rating: u8) -> FarmerFeedback {
        FarmerFeedback {
            rating,
            notes: String::new(),
            steps_taken: String::new(),
            actual_outcome: String::new(),
            outcome_status: OutcomeStatus::Pending,
            yield_impact: None,
            crop_saved_percentage: None,
            date_added: Utc::now(),
        }
    }

    #[test]
    fn test_feedback_rating_bounds() {
        assert!(validate_feedback(&feedback(1)).is_ok());
        assert!(validate_feedback(&feedback(5)).is_ok());
        assert!(validate_feedback(&feedback(0)).is_err());
        assert!(validate_feedback(&feedback(6)).is_err());
    }

    #[test]
    fn test_weather_reading_bounds() {
        let ok = WeatherReading {
            temperature_celsius: 36.0,
            rainfall_mm: 25.0,
            humidity_percent: 75.0,
        };
        assert!(validate_weather_reading(&ok).is_ok());

        let bad = WeatherReading {
            humidity_percent: 130.0,
            ..ok
        };
        assert!(validate_weather_reading(&bad).is_err());
    }
}
