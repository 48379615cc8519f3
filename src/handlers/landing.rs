//! Landing page handler, also used as the catch-all fallback.

use crate::{config::AppConfig, services::LandingPage};
use actix_web::{HttpRequest, HttpResponse, web};
use paperclip::actix::api_v2_operation;

/// Landing page
///
/// Served for `/` and for every path without a route of its own, so stray
/// paths opened by the LINE in-app browser never end in a 404.
#[api_v2_operation(
    summary = "Landing Page",
    description = "Returns the clock-in page for the LIFF app.",
    tags("Landing")
)]
pub async fn index(req: HttpRequest) -> HttpResponse {
    let html = match req.app_data::<web::Data<LandingPage>>() {
        Some(page) => page.html().to_string(),
        None => LandingPage::render(&AppConfig::default()).html().to_string(),
    };

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
