pub mod dashboard;
pub mod form;
pub mod order;
pub mod progress;
pub mod report;
pub mod session;
pub mod status;

use fieldops_auth_types::identity::IdentityHeaders;

use crate::domain::types::Identity;
use crate::error::WorkOrdersError;
use crate::state::AppState;
use crate::usecase::identity::ResolveIdentityUseCase;

/// Resolve the caller's identity and role from the accounts tables.
pub(crate) async fn resolve_caller(
    state: &AppState,
    identity: IdentityHeaders,
) -> Result<Identity, WorkOrdersError> {
    let usecase = ResolveIdentityUseCase {
        repo: state.actor_repo(),
    };
    usecase.execute(identity.user_id).await
}
