use crate::core::scoring::{
    budget_score, capacity_score, event_type_score, location_score, overall_score,
};
use crate::models::{Event, Hall, Hotel, Recommendation, ScoreVector, ScoringWeights};

/// Candidates below this overall score are dropped, not just down-ranked
pub const MIN_MATCH_SCORE: f64 = 40.0;

/// Neutral sub-score used for capacity and budget when a hotel has no halls
const HOTEL_LEVEL_NEUTRAL: f64 = 50.0;

/// Venue recommendation engine
///
/// Scores every (event, hotel, hall) triple against the weighted criteria
/// and returns the qualifying candidates ranked by overall score. Holds only
/// the constant weights; a single instance serves all requests.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    weights: ScoringWeights,
}

impl RecommendationEngine {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Generate ranked recommendations for all of a user's events
    ///
    /// For each event and hotel, every hall of that hotel is scored
    /// independently. A hotel with no halls on record produces at most one
    /// hotel-level candidate with neutral capacity and budget scores. Halls
    /// whose `hotel_id` matches no hotel in `hotels` are never considered.
    ///
    /// The result is sorted by overall score descending; equal scores keep
    /// encounter order (events outer, hotels middle, halls inner).
    pub fn recommend(
        &self,
        events: &[Event],
        hotels: &[Hotel],
        halls: &[Hall],
    ) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();

        for event in events {
            for hotel in hotels {
                let hotel_halls: Vec<&Hall> =
                    halls.iter().filter(|h| h.hotel_id == hotel.id).collect();

                if hotel_halls.is_empty() {
                    if let Some(rec) = self.score_candidate(event, hotel, None) {
                        recommendations.push(rec);
                    }
                } else {
                    for hall in hotel_halls {
                        if let Some(rec) = self.score_candidate(event, hotel, Some(hall)) {
                            recommendations.push(rec);
                        }
                    }
                }
            }
        }

        // Vec::sort_by is stable, preserving encounter order for ties
        recommendations.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        recommendations
    }

    /// Score a single (event, hotel[, hall]) candidate, returning it only if
    /// it clears the minimum threshold
    fn score_candidate(
        &self,
        event: &Event,
        hotel: &Hotel,
        hall: Option<&Hall>,
    ) -> Option<Recommendation> {
        let (capacity, budget) = match hall {
            Some(hall) => (
                capacity_score(event.guest_count, hall.capacity),
                budget_score(event.budget, hall.price_per_event),
            ),
            None => (HOTEL_LEVEL_NEUTRAL, HOTEL_LEVEL_NEUTRAL),
        };

        let scores = ScoreVector {
            location: location_score(&event.location, &hotel.city),
            capacity,
            budget,
            event_type: event_type_score(
                &event.event_type,
                &event.event_name,
                hotel.description.as_deref(),
            ),
        };

        let match_score = overall_score(&scores, &self.weights);
        if match_score < MIN_MATCH_SCORE {
            return None;
        }

        Some(Recommendation {
            hotel: hotel.clone(),
            hall: hall.cloned(),
            event: event.clone(),
            match_score,
            confidence: match_score / 100.0,
            reasons: generate_reasons(&scores, event, hall),
            scores,
        })
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Generate human-readable reasons for a match
///
/// Fixed category order (location, capacity, budget, event type), at most one
/// reason per category. The capacity reason is only emitted when a hall with
/// a non-zero capacity is present.
pub fn generate_reasons(scores: &ScoreVector, event: &Event, hall: Option<&Hall>) -> Vec<String> {
    let mut reasons = Vec::new();

    if scores.location >= 90.0 {
        reasons.push("Perfect location match".to_string());
    } else if scores.location >= 50.0 {
        reasons.push("Nearby location".to_string());
    } else if scores.location >= 30.0 {
        reasons.push("In the same region".to_string());
    }

    if let Some(capacity) = hall.and_then(|h| h.capacity).filter(|c| *c > 0) {
        if scores.capacity >= 90.0 {
            reasons.push(format!(
                "Ideal hall capacity for {} guests",
                event.guest_count
            ));
        } else if scores.capacity >= 70.0 {
            reasons.push(format!("Hall can accommodate {} guests", event.guest_count));
        } else if scores.capacity >= 50.0 {
            reasons.push(format!("Hall available (capacity: {})", capacity));
        }
    }

    if scores.budget >= 90.0 {
        reasons.push("Excellent value - Great savings!".to_string());
    } else if scores.budget >= 80.0 {
        reasons.push("Within your budget".to_string());
    } else if scores.budget >= 50.0 {
        reasons.push("Slightly above budget".to_string());
    }

    if scores.event_type >= 70.0 {
        reasons.push(format!("Perfect for {} events", event.event_type));
    } else if scores.event_type >= 60.0 {
        reasons.push(format!("Suitable for {}", event.event_type));
    }

    reasons
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn create_event(location: &str, guests: u32, budget: Option<f64>) -> Event {
        Event {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            event_name: "Smith Wedding".to_string(),
            event_type: "wedding".to_string(),
            location: location.to_string(),
            guest_count: guests,
            budget,
            event_date: None,
            status: None,
        }
    }

    fn create_hotel(city: &str, description: Option<&str>) -> Hotel {
        Hotel {
            id: Uuid::new_v4(),
            name: format!("Hotel {}", city),
            city: city.to_string(),
            address: None,
            description: description.map(str::to_string),
            image_url: None,
        }
    }

    fn create_hall(hotel_id: Uuid, capacity: Option<u32>, price: Option<f64>) -> Hall {
        Hall {
            id: Uuid::new_v4(),
            hotel_id,
            name: "Grand Hall".to_string(),
            capacity,
            price_per_event: price,
            description: None,
        }
    }

    #[test]
    fn test_hotel_without_halls_gets_one_hotel_level_recommendation() {
        let engine = RecommendationEngine::with_default_weights();
        let event = create_event("Paris", 100, Some(5000.0));
        let hotel = create_hotel("Paris", Some("wedding venue"));

        let recs = engine.recommend(&[event], &[hotel], &[]);

        assert_eq!(recs.len(), 1);
        assert!(recs[0].hall.is_none());
        assert_eq!(recs[0].scores.capacity, 50.0);
        assert_eq!(recs[0].scores.budget, 50.0);
        // 100*0.4 + 50*0.3 + 50*0.2 + 80*0.1 = 73.0
        assert_eq!(recs[0].match_score, 73.0);
    }

    #[test]
    fn test_each_hall_scored_independently() {
        let engine = RecommendationEngine::with_default_weights();
        let event = create_event("Paris", 100, Some(5000.0));
        let hotel = create_hotel("Paris", Some("wedding venue"));
        let halls = vec![
            create_hall(hotel.id, Some(110), Some(4000.0)),
            create_hall(hotel.id, Some(400), Some(8000.0)),
        ];

        let recs = engine.recommend(&[event], &[hotel], &halls);

        assert_eq!(recs.len(), 2);
        assert!(recs[0].match_score > recs[1].match_score);
        assert_eq!(recs[0].hall.as_ref().unwrap().capacity, Some(110));
    }

    #[test]
    fn test_halls_with_unmatched_hotel_id_are_excluded() {
        let engine = RecommendationEngine::with_default_weights();
        let event = create_event("Paris", 100, Some(5000.0));
        let hotel = create_hotel("Paris", Some("wedding venue"));
        let stray_hall = create_hall(Uuid::new_v4(), Some(110), Some(4000.0));

        let recs = engine.recommend(&[event], &[hotel.clone()], &[stray_hall]);

        // The stray hall never attaches: the hotel falls back to hotel-level
        assert_eq!(recs.len(), 1);
        assert!(recs[0].hall.is_none());
    }

    #[test]
    fn test_below_threshold_candidates_are_dropped() {
        let engine = RecommendationEngine::with_default_weights();
        // No location match, no description, unknown capacity/budget:
        // 0*0.4 + 25*0.3 + 50*0.2 + 50*0.1 = 22.5 < 40
        let event = create_event("Paris", 100, None);
        let hotel = create_hotel("Berlin", None);
        let hall = create_hall(hotel.id, None, None);

        let recs = engine.recommend(&[event], &[hotel], &[hall]);
        assert!(recs.is_empty());
    }

    #[test]
    fn test_ties_keep_encounter_order() {
        let engine = RecommendationEngine::with_default_weights();
        let event = create_event("Paris", 100, Some(5000.0));
        let hotel_a = create_hotel("Paris", Some("wedding venue"));
        let hotel_b = create_hotel("Paris", Some("wedding venue"));

        let recs = engine.recommend(&[event], &[hotel_a.clone(), hotel_b.clone()], &[]);

        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].match_score, recs[1].match_score);
        assert_eq!(recs[0].hotel.id, hotel_a.id);
        assert_eq!(recs[1].hotel.id, hotel_b.id);
    }

    #[test]
    fn test_confidence_is_score_over_100() {
        let engine = RecommendationEngine::with_default_weights();
        let event = create_event("Paris", 100, Some(5000.0));
        let hotel = create_hotel("Paris", Some("wedding venue"));
        let hall = create_hall(hotel.id, Some(110), Some(4000.0));

        let recs = engine.recommend(&[event], &[hotel], &[hall]);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].confidence, recs[0].match_score / 100.0);
    }

    #[test]
    fn test_reason_order_and_ladder() {
        let event = create_event("Paris", 100, Some(5000.0));
        let hall = create_hall(Uuid::new_v4(), Some(110), Some(4000.0));
        let scores = ScoreVector {
            location: 100.0,
            capacity: 100.0,
            budget: 90.0,
            event_type: 80.0,
        };

        let reasons = generate_reasons(&scores, &event, Some(&hall));
        assert_eq!(
            reasons,
            vec![
                "Perfect location match",
                "Ideal hall capacity for 100 guests",
                "Excellent value - Great savings!",
                "Perfect for wedding events",
            ]
        );
    }

    #[test]
    fn test_no_capacity_reason_without_hall() {
        let event = create_event("Paris", 100, Some(5000.0));
        let scores = ScoreVector {
            location: 50.0,
            capacity: 95.0,
            budget: 85.0,
            event_type: 65.0,
        };

        let reasons = generate_reasons(&scores, &event, None);
        assert_eq!(
            reasons,
            vec!["Nearby location", "Within your budget", "Suitable for wedding"]
        );
    }

    #[test]
    fn test_no_capacity_reason_for_zero_capacity_hall() {
        let event = create_event("Paris", 100, Some(5000.0));
        let hall = create_hall(Uuid::new_v4(), Some(0), Some(4000.0));
        let scores = ScoreVector {
            location: 30.0,
            capacity: 95.0,
            budget: 40.0,
            event_type: 10.0,
        };

        let reasons = generate_reasons(&scores, &event, Some(&hall));
        assert_eq!(reasons, vec!["In the same region"]);
    }
}
