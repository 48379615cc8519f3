//! Data models for the clock proxy.
//!
//! Inbound clock requests, the failure envelope, and the operational
//! endpoint responses.

pub mod api;
pub mod clock;
pub mod envelope;

pub use api::*;
pub use clock::*;
pub use envelope::*;
