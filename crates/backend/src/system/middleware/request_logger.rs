use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Logs method, path, status and duration of every request
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed = start.elapsed().as_millis();
    if status.is_success() {
        tracing::info!("{:>5}ms | {} {:>6} {}", elapsed, status.as_u16(), method, path);
    } else {
        tracing::warn!("{:>5}ms | {} {:>6} {}", elapsed, status.as_u16(), method, path);
    }
    response
}
