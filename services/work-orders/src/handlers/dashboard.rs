use axum::{Json, extract::State};
use serde::Serialize;

use fieldops_auth_types::identity::IdentityHeaders;

use crate::domain::types::DashboardCounts;
use crate::error::WorkOrdersError;
use crate::state::AppState;
use crate::usecase::dashboard::DashboardUseCase;

// ── GET /dashboard ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct DashboardResponse {
    pub total: u64,
    pub pendientes: u64,
    pub progreso: u64,
    pub finalizados: u64,
}

impl From<DashboardCounts> for DashboardResponse {
    fn from(counts: DashboardCounts) -> Self {
        Self {
            total: counts.total,
            pendientes: counts.pending,
            progreso: counts.in_progress,
            finalizados: counts.finalized,
        }
    }
}

pub async fn get_dashboard(
    _identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, WorkOrdersError> {
    let usecase = DashboardUseCase {
        repo: state.order_repo(),
    };
    Ok(Json(usecase.execute().await?.into()))
}
