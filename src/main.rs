use actix_web::HttpServer;
use clock_proxy::{AppConfig, AppState, LoggingConfig, create_app, telemetry};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Local runs read a .env file; deployed environments set variables directly
    dotenv::dotenv().ok();

    let logging = LoggingConfig::from_env();
    if let Err(e) = telemetry::init_tracing(&logging) {
        eprintln!("Failed to initialize tracing: {e}");
    }

    let config = AppConfig::from_env();
    for warning in config.warnings() {
        tracing::warn!("{warning}");
    }

    let state = AppState::from_env(config.clone()).map_err(std::io::Error::other)?;
    let (host, port) = config.bind_address();

    tracing::info!(
        host = %host,
        port,
        shop_name = %config.shop_name,
        geofence_meters = config.geofence_meters,
        gas_configured = config.has_gas_url(),
        "Clock proxy starting"
    );

    HttpServer::new(move || create_app(state.clone()))
        .bind((host.as_str(), port))?
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test, web};
    use clock_proxy::{health, version};

    #[actix_web::test]
    async fn test_health() {
        let app = test::init_service(App::new().route("/api/health", web::get().to(health))).await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());

        let body = test::read_body(resp).await;
        let body_str = std::str::from_utf8(&body).unwrap();
        assert!(body_str.contains("healthy"));
    }

    #[actix_web::test]
    async fn test_version() {
        let app = test::init_service(App::new().route("/api/version", web::get().to(version))).await;

        let req = test::TestRequest::get().uri("/api/version").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());

        let body = test::read_body(resp).await;
        let body_str = std::str::from_utf8(&body).unwrap();
        assert!(body_str.contains("version"));
        assert!(body_str.contains("commit"));
        assert!(body_str.contains("build_time"));
    }
}
