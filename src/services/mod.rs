// Service exports
pub mod cache;
pub mod supabase;

pub use cache::{CacheError, CacheKey, CatalogCache};
pub use supabase::{SupabaseClient, SupabaseError, SupabaseTables};
