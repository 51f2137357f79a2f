//! Mapping entity representing a stored short code and its target URL.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A shortened URL mapping with metadata.
///
/// Represents one row of the `urls` table: the long URL submitted by a
/// client and the 3-character code that redirects to it. Field names are
/// mapped from the on-disk column names (`long`, `short`, `date_created`)
/// via aliases in the queries.
#[derive(Debug, Clone, FromRow)]
pub struct UrlMapping {
    pub id: i64,
    pub long_url: String,
    pub short_code: String,
    /// Hit counter reserved in the schema; nothing increments it yet.
    pub visits: i64,
    pub created_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(
        id: i64,
        long_url: String,
        short_code: String,
        visits: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            long_url,
            short_code,
            visits,
            created_at,
        }
    }
}

/// Input data for creating a new mapping.
///
/// `created_at` and `visits` are filled in by the store.
#[derive(Debug, Clone)]
pub struct NewMapping {
    pub long_url: String,
    pub short_code: String,
}
