//! Metrics collection middleware.

use crate::{services::AppMetrics, utils::route::extract_route_pattern};
use actix_web::{
    Error,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    web,
};
use std::{
    future::{Ready, ready},
    pin::Pin,
    time::Instant,
};

/// Request metrics middleware
///
/// Counts every response and its latency by method, status and route. The
/// route is the matched resource pattern; everything answered by the landing
/// page catch-all shares the `fallback` label so arbitrary paths cannot grow
/// the label set. Scrapes of `/api/metrics` are not counted.
pub struct MetricsMiddleware;

impl<S, B> Transform<S, ServiceRequest> for MetricsMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = MetricsService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(MetricsService { service }))
    }
}

pub struct MetricsService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for MetricsService<S>
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
        let started = Instant::now();
        let method = req.method().clone();
        let fut = self.service.call(req);

        Box::pin(async move {
            let res = fut.await?;

            // Routing has happened by now, so the matched pattern is available
            if let Some(metrics) = res.request().app_data::<web::Data<AppMetrics>>() {
                let route = extract_route_pattern(res.request());
                metrics.record_request(method.as_str(), &route, res.status().as_u16(), started.elapsed());
                metrics.update_uptime();
            }

            Ok(res)
        })
    }
}
