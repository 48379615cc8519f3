//! Clock proxy endpoint handler.

use crate::{error::ClockError, middleware::RequestId, services::ClockProxy};
use actix_web::{HttpMessage, HttpRequest, HttpResponse, ResponseError, web};
use paperclip::actix::api_v2_operation;
use tracing::Instrument;

/// Largest `/api/clock` body that is read. Anything bigger is treated like an
/// unparsable body.
pub const MAX_CLOCK_BODY_BYTES: usize = 1024 * 1024;

/// Clock-in/clock-out proxy endpoint
///
/// Validates the body, forwards the allow-listed fields to the downstream web
/// app and answers with either the downstream JSON or a failure envelope. The
/// body is read raw, with its own size limit, so that malformed or oversized
/// bodies reach field validation instead of being rejected by an extractor.
#[api_v2_operation(
    summary = "Clock In/Out",
    description = "Forwards {action, userId, lat, lng, device, note} to the configured Apps Script web app. \
                   Every response is a JSON object with an `ok` field; failures add `code` and `message`. \
                   Validation failures return 400, a missing downstream URL returns 500, and downstream \
                   failures return 200 with `ok: false`.",
    tags("Clock")
)]
pub async fn clock(req: HttpRequest, payload: web::Payload) -> HttpResponse {
    let Some(proxy) = req.app_data::<web::Data<ClockProxy>>() else {
        tracing::error!("Clock proxy is not registered with the application");
        return ClockError::NoGasUrl.error_response();
    };

    let request_id = req
        .extensions()
        .get::<RequestId>()
        .map(|id| id.as_str().to_string())
        .unwrap_or_default();

    let span = tracing::info_span!("clock", request_id = %request_id);
    let body = read_body(payload).instrument(span.clone()).await;

    let (status, json) = proxy.handle(&body).instrument(span).await;
    HttpResponse::build(status).json(json)
}

/// Buffer the body up to [`MAX_CLOCK_BODY_BYTES`]. Oversized or broken
/// streams yield an empty body.
async fn read_body(payload: web::Payload) -> web::Bytes {
    match payload.to_bytes_limited(MAX_CLOCK_BODY_BYTES).await {
        Ok(Ok(body)) => body,
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "Failed to read clock request body");
            web::Bytes::new()
        }
        Err(_) => {
            tracing::warn!(limit = MAX_CLOCK_BODY_BYTES, "Clock request body exceeds limit");
            web::Bytes::new()
        }
    }
}
