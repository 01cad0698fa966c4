//! Advice session models
//!
//! One session records a single image-analysis interaction; farmer feedback
//! can be attached later. Sessions are never auto-deleted.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome reported by the farmer after following advice
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    Positive,
    Neutral,
    NeedsFollowup,
    Pending,
}

/// Farmer feedback attached to a session after the fact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmerFeedback {
    /// 1-5
    pub rating: u8,
    pub notes: String,
    pub steps_taken: String,
    pub actual_outcome: String,
    pub outcome_status: OutcomeStatus,
    /// Percentage, positive or negative
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yield_impact: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop_saved_percentage: Option<f64>,
    pub date_added: DateTime<Utc>,
}

/// A persisted record of one analysis interaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceSession {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub crop_type: String,
    pub issue: String,
    pub topic: String,
    pub recommendation_summary: String,
    pub full_recommendation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farmer_feedback: Option<FarmerFeedback>,
}

/// Filters for querying the session log
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionFilters {
    pub crop_type: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub search_query: Option<String>,
}

/// A topic and how often it was consulted
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TopicCount {
    pub topic: String,
    pub count: usize,
}

/// Aggregate statistics over the session log
#[derive(Debug, Clone, Serialize)]
pub struct SessionStats {
    pub total_sessions: usize,
    pub average_rating: f64,
    pub positive_outcomes: usize,
    pub most_consulted_topics: Vec<TopicCount>,
}
