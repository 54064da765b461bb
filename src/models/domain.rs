use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An event a user is planning, fetched from the `events` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub user_id: Uuid,
    pub event_name: String,
    pub event_type: String,
    pub location: String,
    pub guest_count: u32,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub event_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// A hotel listed on the platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hotel {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A bookable hall belonging to exactly one hotel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hall {
    pub id: Uuid,
    pub hotel_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub price_per_event: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

/// The four per-criterion sub-scores, each in [0, 100]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreVector {
    pub location: f64,
    pub capacity: f64,
    pub budget: f64,
    pub event_type: f64,
}

/// A scored (event, hotel[, hall]) candidate that cleared the threshold
///
/// `hall` is None for a hotel-level recommendation (the hotel has no halls
/// on record).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub hotel: Hotel,
    pub hall: Option<Hall>,
    pub event: Event,
    #[serde(rename = "matchScore")]
    pub match_score: f64,
    pub confidence: f64,
    pub reasons: Vec<String>,
    pub scores: ScoreVector,
}

/// The authenticated caller, as resolved by Supabase auth
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}

/// Scoring weights for the four criteria; must sum to 1.0
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub location: f64,
    pub capacity: f64,
    pub budget: f64,
    pub event_type: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.location + self.capacity + self.budget + self.event_type
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            location: 0.40,
            capacity: 0.30,
            budget: 0.20,
            event_type: 0.10,
        }
    }
}
