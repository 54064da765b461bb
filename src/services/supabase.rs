use crate::models::{AuthenticatedUser, Event, Hall, Hotel};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur when talking to Supabase
#[derive(Debug, Error)]
pub enum SupabaseError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Supabase table names
#[derive(Debug, Clone)]
pub struct SupabaseTables {
    pub events: String,
    pub hotels: String,
    pub halls: String,
}

/// Supabase API client
///
/// Handles all communication with the Supabase backend:
/// - Resolving a bearer token to a user via the auth endpoint
/// - Fetching event/hotel/hall rows over the PostgREST interface
pub struct SupabaseClient {
    base_url: String,
    anon_key: String,
    client: Client,
    tables: SupabaseTables,
}

impl SupabaseClient {
    /// Create a new Supabase client
    pub fn new(base_url: String, anon_key: String, tables: SupabaseTables) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            anon_key,
            client,
            tables,
        }
    }

    /// Resolve a user's bearer token against the Supabase auth endpoint
    ///
    /// A non-success auth status means the token is expired or invalid and
    /// maps to `Unauthorized`; transport failures surface as `RequestError`.
    pub async fn verify_token(&self, token: &str) -> Result<AuthenticatedUser, SupabaseError> {
        let url = format!("{}/auth/v1/user", self.base_url.trim_end_matches('/'));

        tracing::debug!("Verifying token against: {}", url);

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await?;

        if !response.status().is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            return Err(SupabaseError::Unauthorized(body));
        }

        response
            .json::<AuthenticatedUser>()
            .await
            .map_err(|e| SupabaseError::InvalidResponse(format!("Failed to parse user: {}", e)))
    }

    /// Fetch the events owned by a user
    pub async fn fetch_events_for_user(&self, user_id: Uuid) -> Result<Vec<Event>, SupabaseError> {
        let filter = ("user_id", format!("eq.{}", user_id));
        self.select(&self.tables.events, "*", &[filter]).await
    }

    /// Fetch the full hotel catalog
    pub async fn fetch_hotels(&self) -> Result<Vec<Hotel>, SupabaseError> {
        self.select(&self.tables.hotels, "*", &[]).await
    }

    /// Fetch all halls across hotels
    pub async fn fetch_halls(&self) -> Result<Vec<Hall>, SupabaseError> {
        self.select(&self.tables.halls, "*", &[]).await
    }

    /// Query rows from a table through the PostgREST interface
    ///
    /// `filters` are (column, expression) pairs in PostgREST syntax, e.g.
    /// `("user_id", "eq.<uuid>")`. The response is a bare JSON array of rows.
    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        select: &str,
        filters: &[(&str, String)],
    ) -> Result<Vec<T>, SupabaseError> {
        let mut url = format!(
            "{}/rest/v1/{}?select={}",
            self.base_url.trim_end_matches('/'),
            table,
            urlencoding::encode(select)
        );
        for (column, expr) in filters {
            url.push('&');
            url.push_str(column);
            url.push('=');
            url.push_str(&urlencoding::encode(expr));
        }

        tracing::debug!("Querying: {}", url);

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", &self.anon_key))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SupabaseError::ApiError(format!(
                "Query on {} failed: {}",
                table,
                response.status()
            )));
        }

        let rows: Vec<T> = response
            .json()
            .await
            .map_err(|e| SupabaseError::InvalidResponse(format!("Failed to parse rows: {}", e)))?;

        tracing::debug!("Queried {} rows from {}", rows.len(), table);

        Ok(rows)
    }
}

impl Default for SupabaseTables {
    fn default() -> Self {
        Self {
            events: "events".to_string(),
            hotels: "hotels".to_string(),
            halls: "hotel_halls".to_string(),
        }
    }
}
