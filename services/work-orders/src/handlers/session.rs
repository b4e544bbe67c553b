use axum::{Json, extract::State};

use fieldops_auth_types::identity::IdentityHeaders;

use crate::domain::types::Identity;
use crate::error::WorkOrdersError;
use crate::handlers::resolve_caller;
use crate::state::AppState;

// ── GET /session ─────────────────────────────────────────────────────────────

/// Identity payload of the caller: `{username, email, user_id, display_name, role}`.
pub async fn get_session(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<Identity>, WorkOrdersError> {
    Ok(Json(resolve_caller(&state, identity).await?))
}
