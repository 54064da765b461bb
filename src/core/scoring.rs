use crate::models::{ScoreVector, ScoringWeights};
use std::collections::HashSet;

/// Common function words excluded from keyword comparison
const STOP_WORDS: [&str; 14] = [
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
];

/// Calculate a location match score (0-100) between an event location and a
/// hotel city
///
/// Check order matters: exact equality beats substring containment, which
/// beats token overlap.
pub fn location_score(event_location: &str, hotel_city: &str) -> f64 {
    let event_loc = event_location.to_lowercase();
    let event_loc = event_loc.trim();
    let hotel_loc = hotel_city.to_lowercase();
    let hotel_loc = hotel_loc.trim();

    if event_loc == hotel_loc {
        return 100.0;
    }

    if event_loc.contains(hotel_loc) || hotel_loc.contains(event_loc) {
        return 50.0;
    }

    let event_words: HashSet<&str> = event_loc.split_whitespace().collect();
    let hotel_words: HashSet<&str> = hotel_loc.split_whitespace().collect();
    if event_words.intersection(&hotel_words).next().is_some() {
        return 30.0;
    }

    0.0
}

/// Calculate how well a hall capacity fits the guest count (0-100)
///
/// A hall without a known capacity scores a neutral-low 25. A guest count of
/// zero is treated the same way, since the fit ratio is undefined.
pub fn capacity_score(guest_count: u32, hall_capacity: Option<u32>) -> f64 {
    let capacity = match hall_capacity {
        Some(c) => c,
        None => return 25.0,
    };

    if guest_count == 0 {
        return 25.0;
    }

    let ratio = capacity as f64 / guest_count as f64;

    if (1.0..=1.2).contains(&ratio) {
        // Ideal fit: hall is 0-20% larger than the party
        100.0
    } else if (0.8..1.0).contains(&ratio) {
        // Slightly undersized
        70.0
    } else if ratio > 1.2 && ratio <= 1.5 {
        // Comfortably larger, acceptable
        85.0
    } else if ratio > 1.5 {
        // Oversized: linear decay floored at 20
        (50.0 - (ratio - 1.5) * 10.0).max(20.0)
    } else {
        // Undersized: linear decay floored at 0
        (30.0 - (1.0 - ratio) * 50.0).max(0.0)
    }
}

/// Calculate budget compatibility (0-100) between an event budget and a hall
/// price
///
/// Missing values score a neutral 50; a non-positive budget is treated as
/// missing. Strictly decreasing step function in price/budget.
pub fn budget_score(event_budget: Option<f64>, hall_price: Option<f64>) -> f64 {
    let (budget, price) = match (event_budget, hall_price) {
        (Some(b), Some(p)) => (b, p),
        _ => return 50.0,
    };

    if budget <= 0.0 {
        return 50.0;
    }

    let price_ratio = price / budget;

    if price_ratio <= 0.7 {
        100.0
    } else if price_ratio <= 0.85 {
        90.0
    } else if price_ratio <= 1.0 {
        80.0
    } else if price_ratio <= 1.15 {
        50.0
    } else if price_ratio <= 1.3 {
        30.0
    } else {
        10.0
    }
}

/// Calculate an event-type match score (0-100) from keyword analysis of the
/// hotel description
pub fn event_type_score(event_type: &str, event_name: &str, hotel_description: Option<&str>) -> f64 {
    let description = match hotel_description {
        Some(d) if !d.is_empty() => d,
        _ => return 50.0,
    };

    let event_text = format!("{} {}", event_type, event_name).to_lowercase();
    let hotel_text = description.to_lowercase();

    let event_keywords = keywords(&event_text);
    let hotel_keywords = keywords(&hotel_text);

    let common = event_keywords.intersection(&hotel_keywords).count();
    if common > 0 {
        let match_ratio = if event_keywords.is_empty() {
            0.0
        } else {
            common as f64 / event_keywords.len() as f64
        };
        return (60.0 + match_ratio * 40.0).min(100.0);
    }

    // No shared keywords: fall back to substring containment against the
    // full description text
    let similarity_count = event_keywords
        .iter()
        .filter(|word| hotel_text.contains(word.as_str()))
        .count();
    if similarity_count > 0 {
        let ratio = similarity_count as f64 / event_keywords.len() as f64;
        return (50.0 + ratio * 30.0).min(100.0);
    }

    40.0
}

/// Combine sub-scores into the weighted overall score, rounded to 2 decimals
pub fn overall_score(scores: &ScoreVector, weights: &ScoringWeights) -> f64 {
    let overall = scores.location * weights.location
        + scores.capacity * weights.capacity
        + scores.budget * weights.budget
        + scores.event_type * weights.event_type;
    round2(overall)
}

/// Split text into the set of word tokens (maximal runs of alphanumerics or
/// underscore), minus stop words
fn keywords(text: &str) -> HashSet<String> {
    text.split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|w| !w.is_empty() && !STOP_WORDS.contains(w))
        .map(str::to_string)
        .collect()
}

#[inline]
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
