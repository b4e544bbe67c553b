use axum::{Json, extract::State};

use fieldops_auth_types::identity::IdentityHeaders;

use crate::error::WorkOrdersError;
use crate::handlers::order::StatusResponse;
use crate::state::AppState;
use crate::usecase::status::ListStatusesUseCase;

// ── GET /statuses ────────────────────────────────────────────────────────────

pub async fn list_statuses(
    _identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<Vec<StatusResponse>>, WorkOrdersError> {
    let usecase = ListStatusesUseCase {
        repo: state.status_repo(),
    };
    let statuses = usecase.execute().await?;
    Ok(Json(statuses.into_iter().map(StatusResponse::from).collect()))
}
