//! Authorization gates for work-order mutations.
//!
//! Every gate is a pure function of the caller's role and id plus the current
//! order state, so a decision can be reproduced from the same inputs.

use fieldops_domain::id::UserId;
use fieldops_domain::role::Role;
use fieldops_domain::status::{FINALIZED, IN_REVIEW, PENDING};

use crate::domain::types::{NewWorkOrder, WorkOrder};

/// Reason a gate rejected a mutation. `Display` is shown to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Denial {
    #[error("technicians cannot create work orders")]
    TechnicianCannotCreate,
    #[error("the order is assigned to another technician")]
    TechnicianNotAssigned,
    #[error("the order is supervised by another supervisor")]
    SupervisorNotAssigned,
    #[error("the order is finalized; no further progress entries are accepted")]
    OrderFinalized,
    #[error("technicians cannot log progress while the order is '{0}'")]
    TechnicianStatusLocked(String),
}

/// Statuses in which technicians may not log progress.
const TECHNICIAN_LOCKED_STATUSES: [&str; 2] = [IN_REVIEW, PENDING];

/// Gate for order creation.
///
/// Technicians are rejected. Supervisors always become the supervisor of the
/// orders they create, whatever was supplied. Everyone else creates the order
/// exactly as supplied.
pub fn gate_order_create(
    role: &Role,
    caller: UserId,
    order: &mut NewWorkOrder,
) -> Result<(), Denial> {
    match role {
        Role::Technician => Err(Denial::TechnicianCannotCreate),
        Role::Supervisor => {
            order.supervisor_id = Some(caller);
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Gate for order updates.
///
/// A technician may only touch orders assigned to them, a supervisor only
/// orders supervised by them. An unset assignment does not block: any
/// technician (or supervisor) may edit an order nobody holds yet.
pub fn gate_order_update(role: &Role, caller: UserId, order: &WorkOrder) -> Result<(), Denial> {
    match role {
        Role::Technician => match order.technician_id() {
            Some(assigned) if assigned != caller => Err(Denial::TechnicianNotAssigned),
            _ => Ok(()),
        },
        Role::Supervisor => match order.supervisor_id() {
            Some(assigned) if assigned != caller => Err(Denial::SupervisorNotAssigned),
            _ => Ok(()),
        },
        _ => Ok(()),
    }
}

/// Gate for appending a progress entry to an order in `status`.
///
/// First match wins: a finalized order is locked for every role, including
/// administrators; technicians are further locked out of pending orders and
/// orders under review. An order without status is only subject to the role
/// rules, which never match a missing label.
pub fn gate_progress_entry(role: &Role, status: Option<&str>) -> Result<(), Denial> {
    if status == Some(FINALIZED) {
        return Err(Denial::OrderFinalized);
    }
    if let (Role::Technician, Some(label)) = (role, status) {
        if TECHNICIAN_LOCKED_STATUSES.contains(&label) {
            return Err(Denial::TechnicianStatusLocked(label.to_owned()));
        }
    }
    Ok(())
}
