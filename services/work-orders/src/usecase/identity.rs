use fieldops_domain::id::UserId;
use fieldops_domain::role::Role;

use crate::domain::repository::ActorRepository;
use crate::domain::types::{Actor, Identity};
use crate::error::WorkOrdersError;

/// Derive the identity payload of an actor.
///
/// `display_name` is the first name when it is non-empty, else the username.
pub fn identity_of(actor: Actor) -> Identity {
    let role = Role::resolve(actor.is_superuser, actor.groups.as_slice());
    let display_name = if actor.first_name.trim().is_empty() {
        actor.username.clone()
    } else {
        actor.first_name
    };
    Identity {
        username: actor.username,
        email: actor.email,
        user_id: actor.id,
        display_name,
        role,
    }
}

// ── ResolveIdentity ──────────────────────────────────────────────────────────

pub struct ResolveIdentityUseCase<R: ActorRepository> {
    pub repo: R,
}

impl<R: ActorRepository> ResolveIdentityUseCase<R> {
    pub async fn execute(&self, user_id: UserId) -> Result<Identity, WorkOrdersError> {
        let actor = self
            .repo
            .find_by_id(user_id)
            .await?
            .ok_or(WorkOrdersError::ActorNotFound)?;
        Ok(identity_of(actor))
    }
}
