//! EV charging station locator: backend API client, station search and page rendering.

pub mod api;
pub mod locator;
pub mod model;
pub mod render;

pub use api::Error;
