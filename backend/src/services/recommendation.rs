//! Tip recommendation engine
//!
//! Pure, synchronous scoring of the static tip catalog against a farmer
//! profile and a weather reading. Crop and state are hard gates; every
//! other match is an additive bonus. The engine has no failure path: a
//! profile matching nothing yields an empty result, which is valid.

use chrono::{Datelike, Utc};
use serde::Serialize;
use shared::{
    farming_tips, weather_alerts, FarmingTip, Season, ScoredTip, SoilType, TaskKind, UserProfile,
    WeatherAlert, WeatherAlertKind, WeatherReading, WeeklyTask, GrowthStage, LocalizedText,
    TipPriority, MAX_WEEKLY_TASKS,
};

// Score weights, preserved verbatim from the original tuning.
const CROP_MATCH_SCORE: i32 = 100;
const STATE_MATCH_SCORE: i32 = 80;
const SOIL_MATCH_SCORE: i32 = 60;
const SEASON_MATCH_SCORE: i32 = 50;
const STAGE_MATCH_SCORE: i32 = 70;
const IRRIGATION_MATCH_SCORE: i32 = 40;
const WEATHER_TRIGGER_SCORE: i32 = 90;
const HIGH_PRIORITY_SCORE: i32 = 30;
const MEDIUM_PRIORITY_SCORE: i32 = 15;

// Fixed alert thresholds.
const HEAVY_RAIN_MM: f64 = 20.0;
const HIGH_TEMP_CELSIUS: f64 = 35.0;
const HIGH_HUMIDITY_PERCENT: f64 = 70.0;
const LOW_HUMIDITY_PERCENT: f64 = 30.0;

/// Ranked tips plus the independently derived alerts and tasks
#[derive(Debug, Clone, Serialize)]
pub struct Recommendations {
    pub tips: Vec<ScoredTip>,
    pub alerts: Vec<WeatherAlert>,
    pub weekly_tasks: Vec<WeeklyTask>,
    pub season: Season,
}

/// The recommendation engine
#[derive(Clone, Default)]
pub struct RecommendationService;

impl RecommendationService {
    pub fn new() -> Self {
        Self
    }

    /// Rank tips for the current calendar month
    pub fn rank(
        &self,
        profile: &UserProfile,
        weather: &WeatherReading,
        limit: usize,
    ) -> Recommendations {
        let season = Season::from_month(Utc::now().month());
        self.rank_for_season(profile, weather, season, limit)
    }

    /// Rank tips for an explicit season; deterministic given its inputs
    pub fn rank_for_season(
        &self,
        profile: &UserProfile,
        weather: &WeatherReading,
        season: Season,
        limit: usize,
    ) -> Recommendations {
        let mut scored: Vec<ScoredTip> = farming_tips()
            .iter()
            .filter_map(|tip| score_tip(tip, profile, weather, season))
            .collect();

        // Stable sort: equal scores keep catalog order.
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(limit);

        Recommendations {
            tips: scored,
            alerts: active_alerts(weather),
            weekly_tasks: weekly_tasks(profile, weather, season),
            season,
        }
    }
}

/// Score one catalog entry. `None` when either hard gate fails.
fn score_tip(
    tip: &FarmingTip,
    profile: &UserProfile,
    weather: &WeatherReading,
    season: Season,
) -> Option<ScoredTip> {
    let mut score = 0;
    let mut matched_factors = Vec::new();

    // Hard gates: crop and state are both mandatory.
    if !tip.crops.contains(&profile.crop) {
        return None;
    }
    score += CROP_MATCH_SCORE;
    matched_factors.push(profile.crop.to_string());

    if !tip.states.contains(&profile.state) {
        return None;
    }
    score += STATE_MATCH_SCORE;
    matched_factors.push(profile.state.to_string());

    if tip.soil_types.contains(&profile.soil) {
        score += SOIL_MATCH_SCORE;
        matched_factors.push(format!("{} Soil", profile.soil));
    }

    if tip.seasons.contains(&season) {
        score += SEASON_MATCH_SCORE;
        matched_factors.push(format!("{} Season", season));
    }

    if let Some(stage) = profile.growth_stage {
        if tip
            .growth_stages
            .as_ref()
            .is_some_and(|stages| stages.contains(&stage))
        {
            score += STAGE_MATCH_SCORE;
            matched_factors.push(format!("{} Stage", stage));
        }
    }

    if let Some(irrigation) = profile.irrigation {
        if tip
            .irrigation_types
            .as_ref()
            .is_some_and(|types| types.contains(&irrigation))
        {
            score += IRRIGATION_MATCH_SCORE;
            matched_factors.push(format!("{} Irrigation", irrigation));
        }
    }

    // All-or-nothing: any failed bound voids the whole trigger bonus.
    if let Some(trigger) = &tip.weather_trigger {
        if let Some(factors) = trigger.evaluate(weather) {
            score += WEATHER_TRIGGER_SCORE;
            matched_factors.extend(factors);
        }
    }

    score += match tip.priority {
        TipPriority::High => HIGH_PRIORITY_SCORE,
        TipPriority::Medium => MEDIUM_PRIORITY_SCORE,
        TipPriority::Low => 0,
    };

    Some(ScoredTip {
        tip: tip.clone(),
        score,
        matched_factors,
    })
}

/// Select alerts whose fixed thresholds are exceeded
///
/// Four independent checks; several alerts may be active at once. Alerts
/// are selected, never scored or ranked.
fn active_alerts(weather: &WeatherReading) -> Vec<WeatherAlert> {
    weather_alerts()
        .iter()
        .filter(|alert| match alert.kind {
            WeatherAlertKind::HeavyRain => weather.rainfall_mm > HEAVY_RAIN_MM,
            WeatherAlertKind::HighTemp => weather.temperature_celsius > HIGH_TEMP_CELSIUS,
            WeatherAlertKind::HighHumidity => weather.humidity_percent > HIGH_HUMIDITY_PERCENT,
            WeatherAlertKind::LowHumidity => weather.humidity_percent < LOW_HUMIDITY_PERCENT,
        })
        .cloned()
        .collect()
}

/// Generate the weekly task list, capped at six entries
///
/// The append order (generic seasonal task first, then weather, soil and
/// stage tasks) reproduces the original behavior; it is not a designed
/// priority ordering, but callers rely on the generic task never being
/// truncated away.
fn weekly_tasks(
    profile: &UserProfile,
    weather: &WeatherReading,
    season: Season,
) -> Vec<WeeklyTask> {
    let mut tasks = vec![WeeklyTask {
        id: "season-task-1".into(),
        title: LocalizedText::new(
            format!("{} Season: Check soil moisture", season),
            format!("{} मौसम: मिट्टी की नमी जांचें", season),
        ),
        description: LocalizedText::new(
            "Monitor soil moisture levels daily for optimal plant growth",
            "इष्टतम पौधे की वृद्धि के लिए दैनिक मिट्टी की नमी के स्तर की निगरानी करें",
        ),
        icon: "droplets".into(),
        completed: false,
        kind: TaskKind::Season,
    }];

    if weather.rainfall_mm > HEAVY_RAIN_MM {
        tasks.push(WeeklyTask {
            id: "weather-drainage".into(),
            title: LocalizedText::new("Clear drainage channels", "जल निकासी चैनल साफ करें"),
            description: LocalizedText::new(
                "Heavy rainfall expected - prevent waterlogging",
                "भारी बारिश की उम्मीद - जलभराव रोकें",
            ),
            icon: "cloud-rain".into(),
            completed: false,
            kind: TaskKind::Weather,
        });
    }

    if weather.temperature_celsius > HIGH_TEMP_CELSIUS {
        tasks.push(WeeklyTask {
            id: "weather-irrigation".into(),
            title: LocalizedText::new("Increase irrigation", "सिंचाई बढ़ाएं"),
            description: LocalizedText::new(
                "High temperature - water crops twice daily",
                "उच्च तापमान - दिन में दो बार फसलों को पानी दें",
            ),
            icon: "thermometer-sun".into(),
            completed: false,
            kind: TaskKind::Weather,
        });
    }

    if weather.humidity_percent > HIGH_HUMIDITY_PERCENT {
        tasks.push(WeeklyTask {
            id: "weather-pest-check".into(),
            title: LocalizedText::new(
                "Check for pests and diseases",
                "कीटों और रोगों की जांच करें",
            ),
            description: LocalizedText::new(
                "High humidity increases disease risk",
                "उच्च आर्द्रता रोग जोखिम बढ़ाती है",
            ),
            icon: "bug".into(),
            completed: false,
            kind: TaskKind::Weather,
        });
    }

    if profile.soil == SoilType::Alluvial {
        tasks.push(WeeklyTask {
            id: "soil-organic-matter".into(),
            title: LocalizedText::new("Add organic matter", "जैविक पदार्थ जोड़ें"),
            description: LocalizedText::new(
                "Mix compost to improve alluvial soil structure",
                "जलोढ़ मिट्टी की संरचना में सुधार के लिए खाद मिलाएं",
            ),
            icon: "mountain".into(),
            completed: false,
            kind: TaskKind::Soil,
        });
    }

    if profile.soil == SoilType::Black {
        tasks.push(WeeklyTask {
            id: "soil-black-moisture".into(),
            title: LocalizedText::new("Monitor soil cracking", "मिट्टी में दरार की निगरानी करें"),
            description: LocalizedText::new(
                "Black soil can crack in dry conditions",
                "सूखी परिस्थितियों में काली मिट्टी में दरार पड़ सकती है",
            ),
            icon: "mountain".into(),
            completed: false,
            kind: TaskKind::Soil,
        });
    }

    if profile.growth_stage == Some(GrowthStage::Flowering) {
        tasks.push(WeeklyTask {
            id: "crop-stage-flowering".into(),
            title: LocalizedText::new(
                "Ensure adequate water at flowering",
                "फूल आने पर पर्याप्त पानी सुनिश्चित करें",
            ),
            description: LocalizedText::new(
                "Critical stage - water stress reduces yield",
                "महत्वपूर्ण अवस्था - जल तनाव उपज कम करता है",
            ),
            icon: "flower".into(),
            completed: false,
            kind: TaskKind::CropStage,
        });
    }

    if profile.growth_stage == Some(GrowthStage::Vegetative) {
        tasks.push(WeeklyTask {
            id: "crop-stage-vegetative".into(),
            title: LocalizedText::new("Weed control", "खरपतवार नियंत्रण"),
            description: LocalizedText::new(
                "Remove weeds to reduce competition for nutrients",
                "पोषक तत्वों के लिए प्रतिस्पर्धा कम करने के लिए खरपतवार हटाएं",
            ),
            icon: "sprout".into(),
            completed: false,
            kind: TaskKind::CropStage,
        });
    }

    tasks.truncate(MAX_WEEKLY_TASKS);
    tasks
}
