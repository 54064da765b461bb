//! Festivisa Algo - venue recommendation service for the Festivisa event platform
//!
//! This library provides the core recommendation engine used by the Festivisa
//! platform. It scores (event, hotel, hall) triples against weighted criteria
//! and returns ranked venue recommendations.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{RecommendationEngine, MIN_MATCH_SCORE};
pub use models::{Event, Hall, Hotel, Recommendation, ScoreVector, ScoringWeights};
