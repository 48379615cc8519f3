//! Business logic and service layer modules.
//!
//! The clock proxy and its downstream client, metrics collection, and the
//! landing page renderer.

pub mod clock;
pub mod gas_client;
pub mod landing;
pub mod metrics;

pub use clock::*;
pub use gas_client::*;
pub use landing::*;
pub use metrics::*;
