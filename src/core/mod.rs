// Core algorithm exports
pub mod engine;
pub mod scoring;

pub use engine::{generate_reasons, RecommendationEngine, MIN_MATCH_SCORE};
pub use scoring::{budget_score, capacity_score, event_type_score, location_score, overall_score};
