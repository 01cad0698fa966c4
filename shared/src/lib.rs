//! Shared types and models for the Farmer Advisory Platform
//!
//! This crate contains the domain vocabularies, the static bilingual tip and
//! alert catalogs, and pure validation helpers used by the backend.

pub mod catalog;
pub mod models;
pub mod types;
pub mod validation;

pub use catalog::*;
pub use models::*;
pub use types::*;
pub use validation::*;
