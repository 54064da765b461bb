mod config;
mod core;
mod models;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{http::header, middleware, web, App, HttpServer};
use config::Settings;
use core::RecommendationEngine;
use models::ScoringWeights;
use routes::recommendations::AppState;
use services::{CatalogCache, SupabaseClient, SupabaseTables};
use std::sync::Arc;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Festivisa venue recommendation service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Initialize Supabase client
    let tables = SupabaseTables {
        events: settings.tables.events,
        hotels: settings.tables.hotels,
        halls: settings.tables.halls,
    };

    let supabase = Arc::new(SupabaseClient::new(
        settings.supabase.url,
        settings.supabase.anon_key,
        tables,
    ));

    info!("Supabase client initialized");

    // Initialize the catalog cache
    let cache_ttl = settings.cache.ttl_secs.unwrap_or(300);
    let cache_entries = settings.cache.max_entries.unwrap_or(16);
    let cache = Arc::new(CatalogCache::new(cache_entries, cache_ttl));

    info!("Catalog cache initialized (TTL: {}s)", cache_ttl);

    // Initialize the engine with configured weights
    let weights = ScoringWeights {
        location: settings.scoring.weights.location,
        capacity: settings.scoring.weights.capacity,
        budget: settings.scoring.weights.budget,
        event_type: settings.scoring.weights.event_type,
    };

    let engine = RecommendationEngine::new(weights);

    info!("Recommendation engine initialized with weights: {:?}", weights);

    // Build application state
    let app_state = AppState {
        supabase,
        cache,
        engine,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "OPTIONS"])
            .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE]);

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
