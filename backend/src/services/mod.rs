//! Business logic services for the Farmer Advisory Platform

pub mod advice_session;
pub mod recommendation;
pub mod weather;

pub use advice_session::AdviceSessionStore;
pub use recommendation::RecommendationService;
pub use weather::WeatherService;
