//! Map page served at `/`.
//!
//! The page itself only holds the map shell; markers are loaded from the
//! alert points API by the browser.

pub mod handlers;
pub mod routes;
pub mod services;

pub use services::MapPageService;
