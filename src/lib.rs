//! # minilink
//!
//! A tiny URL shortening service built with Axum and SQLite.
//!
//! Clients POST a long URL and get back a 3-character code drawn from
//! lowercase letters and digits; visiting `/{code}` redirects to the
//! original URL. Stored mappings can be read back as JSON or as a small
//! HTML page.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and repository traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - HTML view page
//!
//! ## Features
//!
//! - Deduplication: resubmitting a known URL returns its existing code
//! - Collision-free code assignment backed by a unique index
//! - In-body status codes ("001", "002") kept stable for existing clients
//!
//! ## Quick Start
//!
//! ```bash
//! # All variables are optional; these are the defaults
//! export DATABASE_URL="sqlite:urls.db"
//! export LISTEN="0.0.0.0:81"
//!
//! # Start the service (migrations run automatically)
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{MappingService, ShortenOutcome};
    pub use crate::domain::entities::{NewMapping, UrlMapping};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
