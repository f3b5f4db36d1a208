//! Access logging and the per-request deadline.

use std::time::Instant;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::info;

use super::{error::ApiError, state::AppState};

/// Time the inner service and emit one structured log line per request.
///
/// The response is passed through unmodified.
pub async fn access_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let user_agent = req
        .headers()
        .get(axum::http::header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("Unknown")
        .to_owned();

    let start = Instant::now();
    let response = next.run(req).await;
    let elapsed = start.elapsed();

    info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        latency_ms = elapsed.as_secs_f64() * 1000.0,
        user_agent = %user_agent,
        "request completed"
    );

    response
}

/// Abort the inner service once `request_timeout` elapses.
///
/// Must sit inside `render_failures` so the expiry is rendered as an envelope.
pub async fn enforce_deadline(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let limit = state.request_timeout;
    tokio::time::timeout(limit, next.run(req)).await.map_err(|_| {
        ApiError::internal(format!(
            "request exceeded {}ms deadline",
            limit.as_millis()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, routing::get, Router};
    use tower::ServiceExt;

    #[tokio::test]
    async fn passes_response_through() {
        let app = Router::new()
            .route("/teapot", get(|| async { (StatusCode::IM_A_TEAPOT, "short and stout") }))
            .layer(axum::middleware::from_fn(access_log));

        let req = axum::http::Request::builder()
            .uri("/teapot")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::IM_A_TEAPOT);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"short and stout");
    }

    fn deadline_app(limit_ms: u64, work_ms: u64) -> Router {
        let state = AppState {
            request_timeout: std::time::Duration::from_millis(limit_ms),
            ..AppState::default()
        };
        Router::new()
            .route(
                "/work",
                get(move || async move {
                    tokio::time::sleep(std::time::Duration::from_millis(work_ms)).await;
                    "done"
                }),
            )
            .layer(axum::middleware::from_fn_with_state(state, enforce_deadline))
    }

    fn get_work() -> axum::http::Request<Body> {
        axum::http::Request::builder()
            .uri("/work")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn fast_requests_beat_the_deadline() {
        let resp = deadline_app(1_000, 0).oneshot(get_work()).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn slow_requests_park_an_internal_error() {
        let resp = deadline_app(20, 500).oneshot(get_work()).await.unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let parked = resp.extensions().get::<ApiError>().unwrap();
        assert_eq!(
            parked.service_error(),
            &common::ServiceError::Internal("Internal Server Error".into())
        );
    }
}
