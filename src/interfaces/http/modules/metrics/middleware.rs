//! Per-route request metrics for the fee API

use std::time::Instant;

use axum::{body::Body, extract::MatchedPath, http::Request, middleware::Next, response::Response};

/// Path of the Prometheus scrape endpoint. Scrapes are not counted.
pub const METRICS_PATH: &str = "/metrics";

/// Records `http_requests_total` (`method`, `path`, `status`) and
/// `http_request_duration_seconds` (`method`, `path`).
///
/// `path` is the route template, e.g.
/// `/api/doctors/doctorfees/getDoctorFeesById/{doctorId}`, so every fee
/// record id lands in the same series.
pub async fn http_metrics_middleware(request: Request<Body>, next: Next) -> Response {
    let path = match request.extensions().get::<MatchedPath>() {
        Some(mp) if mp.as_str() == METRICS_PATH => return next.run(request).await,
        Some(mp) => mp.as_str().to_string(),
        None => "unmatched".to_string(),
    };
    let method = request.method().to_string();

    let start = Instant::now();
    let response = next.run(request).await;
    let duration = start.elapsed().as_secs_f64();

    let status = response.status().as_u16().to_string();

    metrics::counter!("http_requests_total", "method" => method.clone(), "path" => path.clone(), "status" => status)
        .increment(1);
    metrics::histogram!("http_request_duration_seconds", "method" => method, "path" => path)
        .record(duration);

    response
}
