use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::HttpMessage;
use futures_util::future::{ready, LocalBoxFuture, Ready};
use log::{error, info, warn};
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::task::{Context, Poll};
use std::time::Instant;
use uuid::Uuid;

// Global counter for fast test ID generation
static REQUEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a request ID - fast counter-based for tests, UUID v4 for production
fn generate_request_id() -> String {
    let is_test = cfg!(test)
        || std::env::var("RUST_ENV")
            .unwrap_or_default()
            .eq_ignore_ascii_case("test");

    if is_test {
        let counter = REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("test-{}", counter)
    } else {
        Uuid::new_v4().to_string()
    }
}

pub struct Logger;

impl<S, B> Transform<S, ServiceRequest> for Logger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = LoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(LoggerMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct LoggerMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for LoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let svc = self.service.clone();
        let start_time = Instant::now();
        let method = req.method().clone();
        let uri = req.uri().clone();
        let peer_addr = req.peer_addr().map(|addr| addr.to_string());

        let correlation_id = generate_request_id();
        req.extensions_mut().insert(correlation_id.clone());

        crate::metrics::http().requests_in_flight.inc();

        Box::pin(async move {
            let result = svc.call(req).await;
            let duration = start_time.elapsed();
            crate::metrics::http().requests_in_flight.dec();

            let mut res = result?;

            // Match info exists only after routing ran, so the route
            // label is read off the response; the pattern (not the raw
            // path) keeps the label space bounded.
            let route = res
                .request()
                .match_pattern()
                .unwrap_or_else(|| "unmatched".to_string());

            if let Ok(header_value) = HeaderValue::try_from(correlation_id.as_str()) {
                res.headers_mut()
                    .insert(HeaderName::from_static("x-request-id"), header_value);
            }

            let status = res.status();
            let status_code = status.as_u16();

            crate::metrics::http()
                .requests_total
                .with_label_values(&[method.as_str(), &route, status.as_str()])
                .inc();
            crate::metrics::http()
                .request_duration
                .with_label_values(&[method.as_str(), &route])
                .observe(duration.as_secs_f64());

            if status_code >= 500 {
                error!(
                    "request_id={} {} {} {} {}ms {}",
                    correlation_id,
                    method,
                    uri,
                    status_code,
                    duration.as_millis(),
                    peer_addr.unwrap_or_else(|| "unknown".to_string())
                );
            } else if status_code >= 400 {
                warn!(
                    "request_id={} {} {} {} {}ms {}",
                    correlation_id,
                    method,
                    uri,
                    status_code,
                    duration.as_millis(),
                    peer_addr.unwrap_or_else(|| "unknown".to_string())
                );
            } else {
                info!(
                    "request_id={} {} {} {} {}ms {}",
                    correlation_id,
                    method,
                    uri,
                    status_code,
                    duration.as_millis(),
                    peer_addr.unwrap_or_else(|| "unknown".to_string())
                );
            }

            Ok(res)
        })
    }
}

pub fn cors_middleware() -> actix_cors::Cors {
    let mut cors = actix_cors::Cors::default()
        .allowed_origin("http://localhost:5173")
        .allowed_origin("http://127.0.0.1:5173")
        .allowed_methods(vec!["GET", "OPTIONS"])
        .allowed_headers(vec![
            actix_web::http::header::ACCEPT,
            actix_web::http::header::CONTENT_TYPE,
        ])
        .max_age(3600);

    // Add production domain if in production environment
    if let Ok(env) = std::env::var("RUST_ENV") {
        if env == "production" {
            cors = cors.allowed_origin("https://islamapp.example.com");
            cors = cors.allowed_origin("https://www.islamapp.example.com");
        }
    }

    cors
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::{call_service, init_service, TestRequest};
    use actix_web::{get, App, HttpResponse, Responder};
    use pretty_assertions::assert_eq;

    #[get("/ping")]
    async fn ping() -> impl Responder {
        HttpResponse::Ok().body("pong")
    }

    #[actix_web::test]
    async fn test_logger_adds_request_id_header() {
        let app = init_service(App::new().wrap(Logger).service(ping)).await;

        let req = TestRequest::get().uri("/ping").to_request();
        let res = call_service(&app, req).await;

        assert_eq!(res.status().as_u16(), 200);
        assert!(res.headers().contains_key("x-request-id"));
    }

    #[test]
    fn test_request_ids_are_unique() {
        let first = generate_request_id();
        let second = generate_request_id();
        assert_ne!(first, second);
    }

    #[actix_web::test]
    async fn test_cors_middleware_configuration() {
        let _cors = cors_middleware();
        // Construction must not panic with or without RUST_ENV set
    }
}
