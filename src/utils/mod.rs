//! Utility functions and helper modules.
//!
//! Request inspection helpers shared by the middleware.

pub mod http;
pub mod route;

pub use http::*;
pub use route::*;
