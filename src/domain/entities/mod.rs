//! Core domain entities representing the business data model.
//!
//! This module contains the fundamental data structures that represent the
//! core concepts of the URL shortening service. Entities are plain data
//! structures without business logic.
//!
//! # Entity Types
//!
//! - [`UrlMapping`] - A stored short code and the URL it redirects to
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with a separate struct for
//! creation: [`NewMapping`] carries only the caller-supplied fields, the
//! store fills in the rest.

pub mod mapping;

pub use mapping::{NewMapping, UrlMapping};
