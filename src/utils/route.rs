//! Route pattern extraction utilities.

use actix_web::HttpRequest;

/// Label for requests served by the catch-all landing page
pub const FALLBACK_ROUTE: &str = "fallback";

/// Extract the matched route pattern for metrics labels
///
/// Unmatched paths all collapse into [`FALLBACK_ROUTE`] so that arbitrary
/// paths cannot grow label cardinality. Only meaningful after routing.
pub fn extract_route_pattern(req: &HttpRequest) -> String {
    req.match_pattern()
        .unwrap_or_else(|| FALLBACK_ROUTE.to_string())
}
