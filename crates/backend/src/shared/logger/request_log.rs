use axum::body::{to_bytes, Body, HttpBody};
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;

/// Groups digits by three: `1234567` -> `1.234.567`
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Cyan for 2xx, yellow for everything else
fn status_color(status: StatusCode) -> &'static str {
    if status.is_success() {
        "36"
    } else {
        "33"
    }
}

/// Size without reading the body: `Content-Length`, else an exact size hint
fn known_size(headers: &HeaderMap, body: &Body) -> Option<u64> {
    headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .or_else(|| body.size_hint().exact())
}

/// One colored line per request: `time | duration | size | status method path`
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // streamed bodies of unknown length are buffered to measure them
    let (size, body) = match known_size(&parts.headers, &body) {
        Some(n) => (format_number(n as usize), body),
        None => match to_bytes(body, usize::MAX).await {
            Ok(bytes) => (format_number(bytes.len()), Body::from(bytes)),
            Err(_) => ("error".to_string(), Body::default()),
        },
    };

    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        status_color(parts.status),
        Local::now().format("%H:%M:%S"),
        start.elapsed().as_millis(),
        size,
        parts.status.as_u16(),
        method,
        path
    );

    Response::from_parts(parts, body)
}
