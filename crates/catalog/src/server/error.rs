//! Failure propagation and the terminal error responder.
//!
//! Handlers and extractors return [`ApiError`]. Its `IntoResponse` impl only
//! sets the status and parks the error in the response extensions;
//! [`render_failures`] is the single place that turns it into the JSON
//! envelope, so every failure is rendered exactly once.

use std::any::Any;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Request, State,
    },
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use common::{protocol::ErrorResponse, ServiceError};
use tracing::{error, warn};

use crate::store::StoreError;

use super::state::AppState;

/// Message sent for failures whose cause must not leak to callers.
const GENERIC_INTERNAL: &str = "Internal Server Error";

/// A request failure on its way to the error responder.
#[derive(Debug, Clone)]
pub struct ApiError {
    error: ServiceError,
    /// Diagnostic detail, shown only in development mode.
    trace: Option<String>,
}

impl ApiError {
    /// An internal failure with a generic public message and private detail.
    pub fn internal(trace: impl Into<String>) -> Self {
        Self {
            error: ServiceError::Internal(GENERIC_INTERNAL.into()),
            trace: Some(trace.into()),
        }
    }

    #[cfg(test)]
    pub fn service_error(&self) -> &ServiceError {
        &self.error
    }

    fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.error.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Build the envelope body. `expose_trace` allows diagnostic detail on 500s.
    pub fn envelope(&self, expose_trace: bool) -> ErrorResponse {
        let body = ErrorResponse::from(&self.error);
        match (&self.error, &self.trace) {
            (ServiceError::Internal(_), Some(trace)) if expose_trace => body.with_stack(trace),
            _ => body,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(error: ServiceError) -> Self {
        Self { error, trace: None }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ServiceError::from(err).into()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ServiceError::validation(
            "Invalid JSON format in request body",
            vec![rejection.body_text()],
        )
        .into()
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ServiceError::validation(
            "Query parameter validation failed",
            vec![rejection.body_text()],
        )
        .into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response = self.status().into_response();
        response.extensions_mut().insert(self);
        response
    }
}

/// Terminal stage: render any parked [`ApiError`] as the JSON envelope.
///
/// Responses without a parked error pass through untouched.
pub async fn render_failures(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    let Some(failure) = response.extensions_mut().remove::<ApiError>() else {
        return response;
    };

    let status = failure.status();
    if status.is_server_error() {
        error!(
            kind = failure.error.kind(),
            status = status.as_u16(),
            detail = failure.trace.as_deref().unwrap_or_default(),
            "request failed"
        );
    } else {
        warn!(
            kind = failure.error.kind(),
            status = status.as_u16(),
            message = %failure.error,
            "request rejected"
        );
    }

    let body = failure.envelope(state.expose_internal_errors);
    (status, Json(body)).into_response()
}

/// Panic hook for `CatchPanicLayer`: the panic becomes an internal failure.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else {
        "unknown panic payload".to_owned()
    };
    ApiError::internal(format!("handler panicked: {detail}")).into_response()
}
