//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one endpoint.

pub mod index;
pub mod new_url;
pub mod redirect;
pub mod view_all;
pub mod view_api;

pub use index::index_handler;
pub use new_url::{new_url_handler, new_url_usage_handler};
pub use redirect::redirect_handler;
pub use view_all::view_all_api_handler;
pub use view_api::view_api_handler;
