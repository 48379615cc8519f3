//! OpenAPI specification generation and app factory.

use crate::{
    handlers::{clock, get_metrics, health, index, version},
    middleware::{MetricsMiddleware, RequestIdMiddleware, SecurityHeaders},
    state::AppState,
};
use actix_web::App;
use paperclip::actix::{OpenApiExt, web};
use paperclip::v2::models::{DefaultApiRaw, Info};

/// Creates the shared OpenAPI specification for the API
pub fn create_openapi_spec() -> DefaultApiRaw {
    DefaultApiRaw {
        info: Info {
            title: "Clock Proxy".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            description: Some(
                "Server-to-server proxy between the LIFF clock-in page and the Apps Script web app.\n\n\
                ## Envelope\n\
                Every `/api/clock` response is a JSON object with an `ok` boolean. On success it is the \
                object returned by the web app. On failure it carries `code` and `message`:\n\
                \n\
                | Code | HTTP | Meaning |\n\
                |---|---|---|\n\
                | `NO_GAS_URL` | 500 | downstream URL not configured |\n\
                | `BAD_ACTION` | 400 | action is not IN/OUT |\n\
                | `NO_USER` | 400 | userId missing or empty |\n\
                | `NO_GPS` | 400 | lat/lng missing |\n\
                | `GAS_UNREACHABLE` | 200 | network error or 15s timeout; see `detail` |\n\
                | `BAD_GAS_RESPONSE` | 200 | web app replied with non-JSON; see `http_status`, `raw` |\n\
                \n\
                ## Routing\n\
                Every path without its own route serves the landing page.".into()
            ),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Creates the application from prebuilt state
///
/// Used by `main` for every worker and by the integration tests, so both see
/// the same routes and middleware stack:
/// - `POST /api/clock` proxy endpoint
/// - health, version and metrics endpoints
/// - OpenAPI specification at `/api/spec/v2`
/// - landing page for `/` and every unmatched path
/// - request IDs, security headers and request metrics
pub fn create_app(
    state: AppState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppState {
        config,
        metrics_config,
        security,
        metrics,
        proxy,
        landing,
    } = state;

    App::new()
        .wrap(SecurityHeaders::new(security))
        .wrap(RequestIdMiddleware)
        .wrap(MetricsMiddleware)
        .wrap_api_with_spec(create_openapi_spec())
        .app_data(web::Data::new(config))
        .app_data(web::Data::new(metrics_config))
        .app_data(web::Data::new(metrics))
        .app_data(web::Data::new(proxy))
        .app_data(web::Data::new(landing))
        .service(web::resource("/").route(web::get().to(index)))
        .service(
            web::resource("/api/clock")
                .route(web::post().to(clock))
                .route(web::get().to(index)),
        )
        .service(web::resource("/api/health").route(web::get().to(health)))
        .service(web::resource("/api/version").route(web::get().to(version)))
        .service(web::resource("/api/metrics").route(web::get().to(get_metrics)))
        .with_json_spec_at("/api/spec/v2")
        .build()
        .default_service(actix_web::web::to(index))
}
