//! Mapping creation and retrieval service.

use std::sync::Arc;

use crate::domain::entities::{NewMapping, UrlMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Outcome of a shorten request.
///
/// Callers render the two cases differently: a fresh mapping echoes the
/// submitted URL, while a duplicate submission reports the code that
/// already served it.
#[derive(Debug)]
pub enum ShortenOutcome {
    /// A new mapping was created for the submitted URL.
    Created(UrlMapping),
    /// The URL was already mapped; no row was created.
    Existing(UrlMapping),
}

/// Service for creating and resolving shortened URL mappings.
///
/// Handles code generation with collision retry and deduplication of
/// already-shortened URLs. Submitted URLs are stored verbatim; no format
/// validation or normalization is applied.
pub struct MappingService<R: MappingRepository> {
    mapping_repository: Arc<R>,
}

impl<R: MappingRepository> MappingService<R> {
    /// Creates a new mapping service.
    pub fn new(mapping_repository: Arc<R>) -> Self {
        Self { mapping_repository }
    }

    /// Creates a short code for `long_url`, or returns the existing mapping.
    ///
    /// # Deduplication
    ///
    /// Deduplication is by exact string match. If any row already maps the
    /// submitted URL, that row is returned as [`ShortenOutcome::Existing`]
    /// and nothing is inserted. "http://a.com" and "http://a.com/" are
    /// different strings and get separate codes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a concurrent insert claims the
    /// generated code first. Returns [`AppError::Internal`] on database
    /// errors.
    pub async fn shorten(&self, long_url: String) -> Result<ShortenOutcome, AppError> {
        if let Some(existing) = self.mapping_repository.find_by_long_url(&long_url).await? {
            return Ok(ShortenOutcome::Existing(existing));
        }

        let short_code = self.generate_unique_code().await?;

        let mapping = self
            .mapping_repository
            .insert(NewMapping {
                long_url,
                short_code,
            })
            .await?;

        Ok(ShortenOutcome::Created(mapping))
    }

    /// Looks up the mapping for a short code.
    ///
    /// Returns `Ok(None)` for unknown codes; the callers answer those with
    /// their own in-body payloads rather than an HTTP error.
    pub async fn resolve(&self, short_code: &str) -> Result<Option<UrlMapping>, AppError> {
        self.mapping_repository.find_by_short_code(short_code).await
    }

    /// Returns every stored mapping.
    pub async fn list_all(&self) -> Result<Vec<UrlMapping>, AppError> {
        self.mapping_repository.list_all().await
    }

    /// Generates a short code no stored mapping uses yet.
    ///
    /// Redraws until a free code comes up, without an attempt cap: the
    /// space holds 46,656 codes, so draws collide rarely until the table
    /// approaches saturation. A full table would keep this loop spinning;
    /// the deployment is expected to stay far below that size.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        loop {
            let code = generate_code();

            if self
                .mapping_repository
                .find_by_short_code(&code)
                .await?
                .is_none()
            {
                return Ok(code);
            }
        }
    }
}
