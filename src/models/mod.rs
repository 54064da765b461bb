// Model exports
pub mod domain;
pub mod responses;

pub use domain::{AuthenticatedUser, Event, Hall, Hotel, Recommendation, ScoreVector, ScoringWeights};
pub use responses::{ErrorResponse, HealthResponse, RecommendationsResponse};
