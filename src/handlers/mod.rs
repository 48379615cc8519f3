//! HTTP request handlers for API endpoints.
//!
//! This module contains all the HTTP request handlers that process
//! incoming requests and generate responses.

pub mod clock;
pub mod health;
pub mod landing;
pub mod metrics;
pub mod openapi;
pub mod version;

pub use clock::*;
pub use health::*;
pub use landing::*;
pub use metrics::*;
pub use openapi::*;
pub use version::*;
