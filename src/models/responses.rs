use serde::{Deserialize, Serialize};
use crate::models::domain::Recommendation;

/// Response for the recommendations endpoint
///
/// `count` and `timestamp` are present on a normal run; when the caller has
/// no events the response carries only an empty list and a `message`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<Recommendation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<chrono::DateTime<chrono::Utc>>,
}

impl RecommendationsResponse {
    pub fn with_results(recommendations: Vec<Recommendation>) -> Self {
        let count = recommendations.len();
        Self {
            recommendations,
            count: Some(count),
            message: None,
            timestamp: Some(chrono::Utc::now()),
        }
    }

    pub fn empty(message: &str) -> Self {
        Self {
            recommendations: vec![],
            count: None,
            message: Some(message.to_string()),
            timestamp: None,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}
