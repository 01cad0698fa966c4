//! Crop image analysis models
//!
//! These mirror the structured JSON contract the external vision model is
//! instructed to produce; the gateway returns them verbatim.

use serde::{Deserialize, Serialize};

/// Severity of a detected crop issue
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// One issue detected in a crop image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropIssue {
    #[serde(rename = "type")]
    pub issue_type: String,
    pub severity: Severity,
    pub description: String,
    /// Free text; bullet points are `•`-prefixed lines
    pub solution: String,
}

/// Full analysis result for one uploaded image
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropAnalysis {
    pub issues: Vec<CropIssue>,
    pub general_health: String,
    pub recommendations: Vec<String>,
}
