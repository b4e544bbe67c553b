use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::policy::Denial;

/// Work-orders service error variants.
#[derive(Debug, thiserror::Error)]
pub enum WorkOrdersError {
    #[error("unknown actor")]
    ActorNotFound,
    #[error("order not found")]
    OrderNotFound,
    #[error("referenced user or status does not exist")]
    InvalidReference,
    #[error("missing data")]
    MissingData,
    #[error("forbidden: {0}")]
    Forbidden(#[from] Denial),
    #[error("report rendering failed")]
    RenderingFailure,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl WorkOrdersError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ActorNotFound => "ACTOR_NOT_FOUND",
            Self::OrderNotFound => "ORDER_NOT_FOUND",
            Self::InvalidReference => "INVALID_REFERENCE",
            Self::MissingData => "MISSING_DATA",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::RenderingFailure => "RENDERING_FAILURE",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

// Extractor rejections answer with the service's JSON error body.

impl From<QueryRejection> for WorkOrdersError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!(%rejection, "query string rejected");
        Self::MissingData
    }
}

impl From<JsonRejection> for WorkOrdersError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(%rejection, "request body rejected");
        Self::MissingData
    }
}

impl From<MultipartRejection> for WorkOrdersError {
    fn from(rejection: MultipartRejection) -> Self {
        tracing::debug!(%rejection, "multipart form rejected");
        Self::MissingData
    }
}

/// An id that does not parse names no order.
impl From<PathRejection> for WorkOrdersError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(%rejection, "path parameter rejected");
        Self::OrderNotFound
    }
}

impl IntoResponse for WorkOrdersError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::ActorNotFound => StatusCode::UNAUTHORIZED,
            Self::OrderNotFound => StatusCode::NOT_FOUND,
            Self::InvalidReference | Self::MissingData => StatusCode::BAD_REQUEST,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::RenderingFailure | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Renderer failures are logged where they happen, with the renderer's detail.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
