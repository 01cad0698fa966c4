//! Advice session log
//!
//! In-process append-only store of analysis interactions. Sessions are
//! created after a successful image analysis, mutated only by farmer
//! feedback edits, and removed only by explicit delete.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;
use shared::{
    validate_feedback, AdviceSession, FarmerFeedback, OutcomeStatus, SessionFilters, SessionStats,
    TopicCount,
};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Store for advice sessions
#[derive(Clone, Default)]
pub struct AdviceSessionStore {
    sessions: Arc<RwLock<Vec<AdviceSession>>>,
}

/// Input for recording a new session
#[derive(Debug, Deserialize)]
pub struct CreateSessionInput {
    pub crop_type: String,
    pub issue: String,
    pub topic: String,
    pub recommendation_summary: String,
    pub full_recommendation: String,
    pub image_url: Option<String>,
}

/// Input for attaching farmer feedback
#[derive(Debug, Deserialize)]
pub struct FeedbackInput {
    pub rating: u8,
    pub notes: String,
    pub steps_taken: String,
    pub actual_outcome: String,
    pub outcome_status: OutcomeStatus,
    pub yield_impact: Option<f64>,
    pub crop_saved_percentage: Option<f64>,
}

impl AdviceSessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new session
    pub async fn create(&self, input: CreateSessionInput) -> AdviceSession {
        let session = AdviceSession {
            id: Uuid::new_v4(),
            date: Utc::now(),
            crop_type: input.crop_type,
            issue: input.issue,
            topic: input.topic,
            recommendation_summary: input.recommendation_summary,
            full_recommendation: input.full_recommendation,
            image_url: input.image_url,
            farmer_feedback: None,
        };

        self.sessions.write().await.push(session.clone());
        session
    }

    /// All sessions in insertion order
    pub async fn list(&self) -> Vec<AdviceSession> {
        self.sessions.read().await.clone()
    }

    pub async fn get(&self, id: Uuid) -> AppResult<AdviceSession> {
        self.sessions
            .read()
            .await
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Advice session".to_string()))
    }

    /// Filtered sessions, newest first
    pub async fn filter(&self, filters: &SessionFilters) -> Vec<AdviceSession> {
        let mut matched: Vec<AdviceSession> = self
            .list()
            .await
            .into_iter()
            .filter(|s| {
                if let Some(crop) = &filters.crop_type {
                    if !s.crop_type.to_lowercase().contains(&crop.to_lowercase()) {
                        return false;
                    }
                }
                if let Some(from) = filters.date_from {
                    if s.date.date_naive() < from {
                        return false;
                    }
                }
                if let Some(to) = filters.date_to {
                    if s.date.date_naive() > to {
                        return false;
                    }
                }
                if let Some(query) = &filters.search_query {
                    let query = query.to_lowercase();
                    if !s.topic.to_lowercase().contains(&query)
                        && !s.issue.to_lowercase().contains(&query)
                        && !s.recommendation_summary.to_lowercase().contains(&query)
                    {
                        return false;
                    }
                }
                true
            })
            .collect();

        matched.sort_by(|a, b| b.date.cmp(&a.date));
        matched
    }

    /// Attach or replace farmer feedback on a session
    pub async fn add_feedback(&self, id: Uuid, input: FeedbackInput) -> AppResult<AdviceSession> {
        let feedback = FarmerFeedback {
            rating: input.rating,
            notes: input.notes,
            steps_taken: input.steps_taken,
            actual_outcome: input.actual_outcome,
            outcome_status: input.outcome_status,
            yield_impact: input.yield_impact,
            crop_saved_percentage: input.crop_saved_percentage,
            date_added: Utc::now(),
        };

        validate_feedback(&feedback).map_err(|msg| AppError::Validation {
            field: "rating".to_string(),
            message: msg.to_string(),
            message_hi: "रेटिंग 1 से 5 के बीच होनी चाहिए।".to_string(),
        })?;

        let mut sessions = self.sessions.write().await;
        let session = sessions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| AppError::NotFound("Advice session".to_string()))?;

        session.farmer_feedback = Some(feedback);
        Ok(session.clone())
    }

    /// Explicitly remove a session
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|s| s.id != id);
        if sessions.len() == before {
            return Err(AppError::NotFound("Advice session".to_string()));
        }
        Ok(())
    }

    /// Aggregate statistics over the log
    pub async fn stats(&self) -> SessionStats {
        let sessions = self.list().await;

        let total_sessions = sessions.len();

        let ratings: Vec<f64> = sessions
            .iter()
            .filter_map(|s| s.farmer_feedback.as_ref().map(|f| f.rating as f64))
            .collect();
        let average_rating = if ratings.is_empty() {
            0.0
        } else {
            ratings.iter().sum::<f64>() / ratings.len() as f64
        };

        let positive_outcomes = sessions
            .iter()
            .filter(|s| {
                s.farmer_feedback
                    .as_ref()
                    .is_some_and(|f| f.outcome_status == OutcomeStatus::Positive)
            })
            .count();

        let mut topic_counts: HashMap<&str, usize> = HashMap::new();
        for session in sessions.iter() {
            *topic_counts.entry(session.topic.as_str()).or_default() += 1;
        }
        let mut most_consulted_topics: Vec<TopicCount> = topic_counts
            .into_iter()
            .map(|(topic, count)| TopicCount {
                topic: topic.to_string(),
                count,
            })
            .collect();
        most_consulted_topics.sort_by(|a, b| b.count.cmp(&a.count).then(a.topic.cmp(&b.topic)));
        most_consulted_topics.truncate(3);

        SessionStats {
            total_sessions,
            average_rating,
            positive_outcomes,
            most_consulted_topics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(crop: &str, topic: &str) -> CreateSessionInput {
        CreateSessionInput {
            crop_type: crop.to_string(),
            issue: "Yellowing leaves".to_string(),
            topic: topic.to_string(),
            recommendation_summary: "Apply nitrogen".to_string(),
            full_recommendation: "Apply urea in split doses".to_string(),
            image_url: None,
        }
    }

    fn feedback(rating: u8, status: OutcomeStatus) -> FeedbackInput {
        FeedbackInput {
            rating,
            notes: String::new(),
            steps_taken: String::new(),
            actual_outcome: String::new(),
            outcome_status: status,
            yield_impact: None,
            crop_saved_percentage: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let store = AdviceSessionStore::new();
        let session = store.create(input("Rice", "Nutrition")).await;
        let fetched = store.get(session.id).await.unwrap();
        assert_eq!(fetched.crop_type, "Rice");
        assert!(fetched.farmer_feedback.is_none());
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = AdviceSessionStore::new();
        let a = store.create(input("Rice", "Pest")).await;
        let b = store.create(input("Wheat", "Nutrition")).await;

        let all = store.list().await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, a.id);
        assert_eq!(all[1].id, b.id);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let store = AdviceSessionStore::new();
        assert!(matches!(
            store.get(Uuid::new_v4()).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_feedback_attaches_and_validates() {
        let store = AdviceSessionStore::new();
        let session = store.create(input("Wheat", "Pest")).await;

        let updated = store
            .add_feedback(session.id, feedback(4, OutcomeStatus::Positive))
            .await
            .unwrap();
        assert_eq!(updated.farmer_feedback.as_ref().unwrap().rating, 4);

        let err = store
            .add_feedback(session.id, feedback(0, OutcomeStatus::Neutral))
            .await;
        assert!(matches!(err, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_filter_by_crop_and_search() {
        let store = AdviceSessionStore::new();
        store.create(input("Rice", "Pest Control")).await;
        store.create(input("Wheat", "Nutrition")).await;

        let filters = SessionFilters {
            crop_type: Some("rice".to_string()),
            ..Default::default()
        };
        let matched = store.filter(&filters).await;
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].crop_type, "Rice");

        let filters = SessionFilters {
            search_query: Some("pest".to_string()),
            ..Default::default()
        };
        assert_eq!(store.filter(&filters).await.len(), 1);
    }

    #[tokio::test]
    async fn test_stats() {
        let store = AdviceSessionStore::new();
        let a = store.create(input("Rice", "Pest Control")).await;
        let b = store.create(input("Rice", "Pest Control")).await;
        store.create(input("Wheat", "Nutrition")).await;

        store
            .add_feedback(a.id, feedback(5, OutcomeStatus::Positive))
            .await
            .unwrap();
        store
            .add_feedback(b.id, feedback(3, OutcomeStatus::Neutral))
            .await
            .unwrap();

        let stats = store.stats().await;
        assert_eq!(stats.total_sessions, 3);
        assert_eq!(stats.average_rating, 4.0);
        assert_eq!(stats.positive_outcomes, 1);
        assert_eq!(stats.most_consulted_topics[0].topic, "Pest Control");
        assert_eq!(stats.most_consulted_topics[0].count, 2);
    }

    #[tokio::test]
    async fn test_delete_removes_only_target() {
        let store = AdviceSessionStore::new();
        let a = store.create(input("Rice", "Pest")).await;
        let b = store.create(input("Wheat", "Pest")).await;

        store.delete(a.id).await.unwrap();
        assert!(store.get(a.id).await.is_err());
        assert!(store.get(b.id).await.is_ok());
        assert!(matches!(
            store.delete(a.id).await,
            Err(AppError::NotFound(_))
        ));
    }
}
