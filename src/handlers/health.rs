//! Health check endpoint handler.

use crate::models::HealthResponse;
use actix_web::{Error, Result, web};
use paperclip::actix::api_v2_operation;

/// Health check endpoint
///
/// Reports liveness only; it does not contact the downstream web app.
#[api_v2_operation(
    summary = "Health Check Endpoint",
    description = "Returns the current health status of the proxy in JSON format.",
    tags("Health")
)]
pub async fn health() -> Result<web::Json<HealthResponse>, Error> {
    let response = HealthResponse {
        status: "healthy".to_string(),
    };

    Ok(web::Json(response))
}
