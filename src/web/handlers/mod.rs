//! HTML template rendering handlers.

mod view;

pub use view::view_url_handler;
