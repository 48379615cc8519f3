//! Security headers middleware implementation.

use crate::config::SecurityHeadersConfig;
use actix_web::{
    Error,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::header::{self, HeaderName, HeaderValue},
};
use std::{
    future::{Ready, ready},
    pin::Pin,
    rc::Rc,
};

/// Security headers middleware factory
///
/// Header values are validated once here; invalid configured values are
/// logged and skipped rather than failing every response.
pub struct SecurityHeaders {
    headers: Rc<Vec<(HeaderName, HeaderValue)>>,
}

impl SecurityHeaders {
    /// Create a new security headers middleware with the given configuration
    pub fn new(config: SecurityHeadersConfig) -> Self {
        Self {
            headers: Rc::new(build_headers(&config)),
        }
    }
}

fn build_headers(config: &SecurityHeadersConfig) -> Vec<(HeaderName, HeaderValue)> {
    let mut headers = Vec::new();

    let mut push = |name: HeaderName, value: &str| match HeaderValue::from_str(value) {
        Ok(value) => headers.push((name, value)),
        Err(_) => tracing::warn!(header = %name, value = %value, "Skipping invalid security header value"),
    };

    if config.content_type_options {
        push(header::X_CONTENT_TYPE_OPTIONS, "nosniff");
    }
    push(header::X_FRAME_OPTIONS, &config.frame_options);
    if config.xss_protection {
        push(header::X_XSS_PROTECTION, "1; mode=block");
    }
    push(header::REFERRER_POLICY, &config.referrer_policy);
    if config.csp_enabled {
        push(header::CONTENT_SECURITY_POLICY, &config.csp_directives);
    }
    if config.hsts_enabled {
        push(
            header::STRICT_TRANSPORT_SECURITY,
            &format!("max-age={}", config.hsts_max_age),
        );
    }

    headers
}

impl<S, B> Transform<S, ServiceRequest> for SecurityHeaders
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SecurityHeadersMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SecurityHeadersMiddleware {
            service,
            headers: Rc::clone(&self.headers),
        }))
    }
}

/// The actual security headers middleware service
pub struct SecurityHeadersMiddleware<S> {
    service: S,
    headers: Rc<Vec<(HeaderName, HeaderValue)>>,
}

impl<S, B> Service<ServiceRequest> for SecurityHeadersMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Clock results are per-request and must never be served from a cache
        let no_store = req.path().starts_with("/api/");
        let fut = self.service.call(req);
        let headers = Rc::clone(&self.headers);

        Box::pin(async move {
            let mut res = fut.await?;
            let response_headers = res.headers_mut();

            for (name, value) in headers.iter() {
                response_headers.insert(name.clone(), value.clone());
            }
            if no_store {
                response_headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
            }

            Ok(res)
        })
    }
}
