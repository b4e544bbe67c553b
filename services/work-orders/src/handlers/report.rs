use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::header,
    response::IntoResponse,
};

use fieldops_auth_types::identity::IdentityHeaders;
use fieldops_domain::id::OrderId;

use crate::error::WorkOrdersError;
use crate::state::AppState;
use crate::usecase::report::GenerateReportUseCase;

// ── GET /orders/{id}/pdf ─────────────────────────────────────────────────────

pub async fn download_report(
    _identity: IdentityHeaders,
    State(state): State<AppState>,
    id: Result<Path<OrderId>, PathRejection>,
) -> Result<impl IntoResponse, WorkOrdersError> {
    let Path(id) = id?;
    let usecase = GenerateReportUseCase {
        orders: state.order_repo(),
        progress: state.progress_repo(),
        renderer: state.renderer(),
        logo_path: state.logo_path.clone(),
    };
    let report = usecase.execute(id).await?;
    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_owned()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", report.file_name),
        ),
    ];
    Ok((headers, report.bytes))
}
