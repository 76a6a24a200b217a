use actix_web::{get, HttpResponse, Responder};
use once_cell::sync::Lazy;
use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
};

/// Application metrics registry
static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

/// HTTP request metrics
pub struct HttpMetrics {
    /// Request duration histogram (in seconds)
    pub request_duration: HistogramVec,
    /// Total HTTP requests counter
    pub requests_total: IntCounterVec,
    /// Active requests gauge
    pub requests_in_flight: IntGauge,
}

/// Upstream content-provider call metrics
pub struct UpstreamMetrics {
    /// Upstream call duration histogram (in seconds)
    pub call_duration: HistogramVec,
    /// Total upstream calls counter, labeled by provider and outcome
    pub calls_total: IntCounterVec,
}

static HTTP: Lazy<HttpMetrics> = Lazy::new(|| {
    let request_duration = HistogramVec::new(
        HistogramOpts::new("http_request_duration_seconds", "HTTP request duration"),
        &["method", "route"],
    )
    .expect("valid histogram opts");
    let requests_total = IntCounterVec::new(
        Opts::new("http_requests_total", "Total HTTP requests"),
        &["method", "route", "status"],
    )
    .expect("valid counter opts");
    let requests_in_flight =
        IntGauge::new("http_requests_in_flight", "Requests currently being served")
            .expect("valid gauge opts");

    REGISTRY
        .register(Box::new(request_duration.clone()))
        .expect("register request_duration");
    REGISTRY
        .register(Box::new(requests_total.clone()))
        .expect("register requests_total");
    REGISTRY
        .register(Box::new(requests_in_flight.clone()))
        .expect("register requests_in_flight");

    HttpMetrics {
        request_duration,
        requests_total,
        requests_in_flight,
    }
});

static UPSTREAM: Lazy<UpstreamMetrics> = Lazy::new(|| {
    let call_duration = HistogramVec::new(
        HistogramOpts::new("upstream_call_duration_seconds", "Upstream call duration"),
        &["provider"],
    )
    .expect("valid histogram opts");
    let calls_total = IntCounterVec::new(
        Opts::new("upstream_calls_total", "Total upstream calls"),
        &["provider", "outcome"],
    )
    .expect("valid counter opts");

    REGISTRY
        .register(Box::new(call_duration.clone()))
        .expect("register call_duration");
    REGISTRY
        .register(Box::new(calls_total.clone()))
        .expect("register calls_total");

    UpstreamMetrics {
        call_duration,
        calls_total,
    }
});

pub fn http() -> &'static HttpMetrics {
    &HTTP
}

pub fn upstream() -> &'static UpstreamMetrics {
    &UPSTREAM
}

/// Prometheus exposition endpoint
#[utoipa::path(
    get,
    path = "/metrics",
    tag = "observability",
    responses(
        (status = 200, description = "Prometheus text exposition")
    )
)]
#[get("/metrics")]
pub async fn metrics_handler() -> impl Responder {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();

    if let Err(e) = encoder.encode(&REGISTRY.gather(), &mut buffer) {
        log::error!("Failed to encode metrics: {}", e);
        return HttpResponse::InternalServerError().finish();
    }

    HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_register_once() {
        // Touching both families twice must not panic on re-registration
        http().requests_in_flight.inc();
        http().requests_in_flight.dec();
        upstream()
            .calls_total
            .with_label_values(&["equran", "ok"])
            .inc();
        upstream()
            .calls_total
            .with_label_values(&["equran", "error"])
            .inc();
    }

    #[actix_web::test]
    async fn test_metrics_endpoint_renders_exposition() {
        use actix_web::test::{call_and_read_body, init_service, TestRequest};
        use actix_web::App;

        http()
            .requests_total
            .with_label_values(&["GET", "/health", "200"])
            .inc();

        let app = init_service(App::new().service(metrics_handler)).await;
        let body = call_and_read_body(&app, TestRequest::get().uri("/metrics").to_request()).await;
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("http_requests_total"));
    }
}
