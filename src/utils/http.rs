//! HTTP utility functions for extracting request information.

use actix_web::HttpRequest;

/// Extract client IP address from request headers
///
/// Behind the hosting platform's proxy the peer address is the proxy itself,
/// so forwarding headers win; the first address in `X-Forwarded-For` is the
/// original client.
pub fn extract_client_ip(req: &HttpRequest) -> String {
    let forwarded = ["X-Forwarded-For", "X-Real-IP"]
        .iter()
        .filter_map(|name| req.headers().get(*name))
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(',').next())
        .map(str::trim)
        .find(|ip| !ip.is_empty());

    match forwarded {
        Some(ip) => ip.to_string(),
        None => req
            .connection_info()
            .peer_addr()
            .unwrap_or("unknown")
            .to_string(),
    }
}

/// Extract user agent from request headers
pub fn extract_user_agent(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("User-Agent")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string())
}
