use std::fmt::Display;

use axum::http::StatusCode;

/// Handler for `GET /healthz`: liveness check.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Map the outcome of a readiness probe (e.g. a database ping) to a status code.
///
/// Failures are logged at `warn` and answered with 503 so orchestrators stop
/// routing traffic without restarting the process.
pub fn readiness<E: Display>(probe: Result<(), E>) -> StatusCode {
    match probe {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "readiness probe failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
