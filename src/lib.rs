//! Clock Proxy - server-to-server relay for LIFF clock-in/clock-out events
//!
//! The browser page cannot call the Apps Script web app directly because of
//! cross-origin restrictions, so it posts to `/api/clock` here and this
//! service forwards the event:
//! - Strict validation of the inbound fields, with an explicit allow-list
//! - A single downstream attempt with a fixed 15 second timeout
//! - A normalized JSON envelope for every outcome
//! - A landing page served for every other path
//!
//! ## Architecture
//!
//! - `models/` - Request, envelope and operational response models
//! - `handlers/` - HTTP request handlers and the app factory
//! - `middleware/` - Request IDs, security headers, request metrics
//! - `services/` - The clock proxy, downstream client, metrics, landing page
//! - `config/` - Configuration structures and environment loading
//! - `utils/` - Request inspection helpers
//!
//! ## Quick Start
//!
//! ```no_run
//! use clock_proxy::{create_app, AppConfig, AppState};
//! use actix_web::HttpServer;
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let state = AppState::new(AppConfig::from_env()).expect("startup");
//!     HttpServer::new(move || create_app(state.clone()))
//!         .bind(("0.0.0.0", 5000))?
//!         .run()
//!         .await
//! }
//! ```

// Core modules
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod telemetry;
pub mod utils;

// Re-export commonly used types and functions for convenience
pub use config::{AppConfig, LogFormat, LoggingConfig, MetricsConfig, SecurityHeadersConfig};
pub use error::{ClockError, StartupError};
pub use handlers::{
    MAX_CLOCK_BODY_BYTES, clock, create_app, create_openapi_spec, get_metrics, health, index,
    version,
};
pub use middleware::{MetricsMiddleware, RequestIdMiddleware, SecurityHeaders};
pub use models::{
    ClockAction, ClockRequest, ErrorEnvelope, HealthResponse, RawClockRequest, VersionResponse,
};
pub use services::{
    AppMetrics, ClockProxy, DOWNSTREAM_TIMEOUT, GasClient, GasClientError, GasClientMetrics,
    GasReply, LandingPage,
};
pub use state::AppState;
pub use utils::{extract_client_ip, extract_route_pattern, extract_user_agent};
