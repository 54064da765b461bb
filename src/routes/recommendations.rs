use actix_web::{web, HttpRequest, HttpResponse, Responder};
use crate::core::RecommendationEngine;
use crate::models::{ErrorResponse, HealthResponse, Hall, Hotel, RecommendationsResponse};
use crate::services::{CacheKey, CatalogCache, SupabaseClient, SupabaseError};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub supabase: Arc<SupabaseClient>,
    pub cache: Arc<CatalogCache>,
    pub engine: RecommendationEngine,
}

/// Configure recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/recommendations", web::get().to(get_recommendations));
}

/// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: "recommendation-engine".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Venue recommendations endpoint
///
/// GET /api/recommendations
///
/// Requires a bearer token in the Authorization header. Returns
/// `{recommendations: [...], count: N}` ranked by match score, or
/// `{recommendations: [], message: "No events found"}` when the caller has
/// no events on record.
async fn get_recommendations(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> impl Responder {
    let token = match bearer_token(&req) {
        Some(token) => token,
        None => {
            tracing::info!("Missing or malformed Authorization header");
            return HttpResponse::Unauthorized().json(ErrorResponse::new("Unauthorized"));
        }
    };

    let user = match state.supabase.verify_token(token).await {
        Ok(user) => user,
        Err(SupabaseError::Unauthorized(details)) => {
            tracing::info!("Token rejected by Supabase auth");
            return HttpResponse::Unauthorized()
                .json(ErrorResponse::with_details("Invalid token", details));
        }
        Err(e) => {
            tracing::error!("Token verification failed: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse::new(e.to_string()));
        }
    };

    tracing::info!("Generating recommendations for user: {}", user.id);

    let events = match state.supabase.fetch_events_for_user(user.id).await {
        Ok(events) => events,
        Err(e) => {
            tracing::error!("Failed to fetch events for {}: {}", user.id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse::new(e.to_string()));
        }
    };

    if events.is_empty() {
        tracing::debug!("No events found for user {}", user.id);
        return HttpResponse::Ok().json(RecommendationsResponse::empty("No events found"));
    }

    let hotels = match load_hotels(&state).await {
        Ok(hotels) => hotels,
        Err(e) => {
            tracing::error!("Failed to fetch hotels: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse::new(e.to_string()));
        }
    };

    let halls = match load_halls(&state).await {
        Ok(halls) => halls,
        Err(e) => {
            tracing::error!("Failed to fetch halls: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse::new(e.to_string()));
        }
    };

    let recommendations = state.engine.recommend(&events, &hotels, &halls);

    tracing::info!(
        "Returning {} recommendations for user {} ({} events x {} hotels, {} halls)",
        recommendations.len(),
        user.id,
        events.len(),
        hotels.len(),
        halls.len()
    );

    HttpResponse::Ok().json(RecommendationsResponse::with_results(recommendations))
}

/// Extract the bearer token from the Authorization header
fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(actix_web::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Fetch the hotel catalog, going through the cache
async fn load_hotels(state: &AppState) -> Result<Vec<Hotel>, SupabaseError> {
    let key = CacheKey::hotels();
    if let Ok(hotels) = state.cache.get::<Vec<Hotel>>(&key).await {
        return Ok(hotels);
    }

    let hotels = state.supabase.fetch_hotels().await?;
    if let Err(e) = state.cache.set(&key, &hotels).await {
        tracing::warn!("Failed to cache hotels: {}", e);
    }
    Ok(hotels)
}

/// Fetch the hall catalog, going through the cache
async fn load_halls(state: &AppState) -> Result<Vec<Hall>, SupabaseError> {
    let key = CacheKey::halls();
    if let Ok(halls) = state.cache.get::<Vec<Hall>>(&key).await {
        return Ok(halls);
    }

    let halls = state.supabase.fetch_halls().await?;
    if let Err(e) = state.cache.set(&key, &halls).await {
        tracing::warn!("Failed to cache halls: {}", e);
    }
    Ok(halls)
}
