//! Configuration structures and loading utilities.
//!
//! Every structure here is loaded once at startup from environment variables
//! and is read-only afterwards.

pub mod app;
pub mod logging;
pub mod metrics;
pub mod security;

pub use app::*;
pub use logging::*;
pub use metrics::*;
pub use security::*;

// Mutex to synchronize tests that modify environment variables
#[cfg(test)]
pub(crate) static ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());
