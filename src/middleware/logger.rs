use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, warn};

/// Logs one line per request: method, URI, status and elapsed time.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed_ms = start.elapsed().as_millis();
    if status.is_server_error() {
        warn!("{} {} {} - {}ms", method, uri, status.as_u16(), elapsed_ms);
    } else {
        info!("{} {} {} - {}ms", method, uri, status.as_u16(), elapsed_ms);
    }

    response
}
