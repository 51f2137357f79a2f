//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization; the shorten
//! request additionally derives form deserialization.

pub mod mapping;
pub mod new_url;
